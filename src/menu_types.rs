// Which overlay page is showing while the session idles in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuScreen {
    Main,
    Options,
}

// Menu option selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    StartRun,
    Options,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsOption {
    GridToggle,
    FreezeBannerToggle,
    Back,
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub screen: MenuScreen,
    pub selected_option: MenuOption,
    pub options_selected: OptionsOption,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            screen: MenuScreen::Main,
            selected_option: MenuOption::StartRun,
            options_selected: OptionsOption::GridToggle,
        }
    }
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }
}
