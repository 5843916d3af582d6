pub const SETTINGS_SCREEN: &str = "SettingsScreen";
pub const TAB_TRAY: &str = "TabTray";
pub const TAB_TRAY_MENU: &str = "TabTrayMenu";
pub const BROWSER_TAB: &str = "BrowserTab";
pub const BROWSER_TAB_MENU: &str = "BrowserTabMenu";
pub const BROWSER_TAB_MENU_2: &str = "BrowserTabMenu2";
pub const FIRST_RUN: &str = "OptionalFirstRun";
pub const HOME_PAGE_SETTINGS: &str = "HomePageSettings";
pub const PASSCODE_SETTINGS: &str = "PasscodeSettings";
pub const PASSCODE_INTERVAL_SETTINGS: &str = "PasscodeIntervalSettings";
pub const SEARCH_SETTINGS: &str = "SearchSettings";
pub const NEW_TAB_SETTINGS: &str = "NewTabSettings";
pub const CLEAR_PRIVATE_DATA_SETTINGS: &str = "ClearPrivateDataSettings";
pub const LOGINS_SETTINGS: &str = "LoginsSettings";
pub const OPEN_WITH_SETTINGS: &str = "OpenWithSettings";
pub const NEW_TAB_SCREEN: &str = "NewTabScreen";
pub const NEW_TAB_MENU: &str = "NewTabMenu";
pub const URL_BAR_OPEN: &str = "URLBarOpen";

pub const ALL_SETTINGS_SCREENS: [&str; 8] = [
    SETTINGS_SCREEN,
    HOME_PAGE_SETTINGS,
    PASSCODE_SETTINGS,
    SEARCH_SETTINGS,
    NEW_TAB_SETTINGS,
    CLEAR_PRIVATE_DATA_SETTINGS,
    LOGINS_SETTINGS,
    OPEN_WITH_SETTINGS,
];
