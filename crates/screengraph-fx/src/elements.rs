//! Element queries the browser graph taps, types into, and swipes.

use screengraph_ir::{Element, ElementKind};

pub const SETTINGS_TABLE: &str = "AppSettingsTableViewController.tableView";

/// Settings table rows, by accessibility identifier.
pub const SETTINGS_CELLS: [&str; 7] = [
    "Search",
    "NewTab",
    "Homepage",
    "TouchIDPasscode",
    "Logins",
    "ClearPrivateData",
    "OpenWith.Setting",
];

pub fn start_browsing() -> Element {
    Element::button("Start Browsing")
}

pub fn url_field() -> Element {
    Element::text_field("url")
}

pub fn address_field() -> Element {
    Element::text_field("address")
}

pub fn toolbar_menu() -> Element {
    Element::button("TabToolbar.menuButton")
}

pub fn tabs_button() -> Element {
    Element::button("URLBarView.tabsButton")
}

pub fn cancel() -> Element {
    Element::button("Cancel")
}

pub fn close_menu() -> Element {
    Element::button("Close Menu")
}

pub fn settings_menu_item() -> Element {
    Element::by_id(ElementKind::Cell, "SettingsMenuItem")
}

pub fn menu_view() -> Element {
    Element::other("MenuViewController.menuView")
}

pub fn settings_cell(id: &str) -> Element {
    Element::table(SETTINGS_TABLE).cell(id)
}

/// First button of the top navigation bar; the system back button.
pub fn navigation_back() -> Element {
    Element::by_index(ElementKind::NavigationBar, 0).button_at(0)
}

pub fn require_passcode_row() -> Element {
    Element::table("AuthenticationManager.settingsTableView").static_text("Require Passcode")
}

pub fn require_passcode_bar() -> Element {
    Element::navigation_bar("Require Passcode")
}

pub fn require_passcode_done() -> Element {
    require_passcode_bar().child_button("Passcode")
}

pub fn enter_passcode_cancel() -> Element {
    Element::navigation_bar("Enter Passcode").child_button("Cancel")
}

pub fn login_list() -> Element {
    Element::table("Login List")
}

pub fn logins_back_to_settings() -> Element {
    Element::navigation_bar("Logins").child_button("Settings")
}

pub fn tab_tray_menu() -> Element {
    Element::button("TabTrayController.menuButton")
}

pub fn tab_tray_add_tab() -> Element {
    Element::button("TabTrayController.addTabButton")
}

/// Every element the browser graph refers to.
pub fn all() -> Vec<Element> {
    let mut elements = vec![
        start_browsing(),
        url_field(),
        address_field(),
        toolbar_menu(),
        tabs_button(),
        cancel(),
        close_menu(),
        settings_menu_item(),
        menu_view(),
        navigation_back(),
        require_passcode_row(),
        require_passcode_bar(),
        require_passcode_done(),
        enter_passcode_cancel(),
        login_list(),
        logins_back_to_settings(),
        tab_tray_menu(),
        tab_tray_add_tab(),
    ];
    elements.extend(SETTINGS_CELLS.iter().map(|id| settings_cell(id)));
    elements
}
