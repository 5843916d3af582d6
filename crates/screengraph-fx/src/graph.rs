use screengraph_ir::SwipeDirection;
use screengraph_model::driver::{DriverError, UiDriver};
use screengraph_model::graph::{GraphError, ScreenGraph};
use screengraph_nav::navigator::{NavError, Navigator};
use tracing::debug;

use crate::elements::{self, SETTINGS_CELLS};
use crate::scenes::*;

pub const DEFAULT_URL: &str = "https://www.mozilla.org/en-US/book/";

fn navigation_back(driver: &mut dyn UiDriver) -> Result<(), DriverError> {
    driver.tap(&elements::navigation_back())
}

/// Build the browser's screen graph, starting at [`FIRST_RUN`].
///
/// `url` is what reaching [`BROWSER_TAB`] through the URL bar loads. For a
/// different page, use [`BrowserNavigation::open_url`].
pub fn create_screen_graph(url: &str) -> Result<ScreenGraph, GraphError> {
    let mut map = ScreenGraph::new();

    map.create_scene(FIRST_RUN)?.gesture(NEW_TAB_SCREEN, |driver| {
        let start = elements::start_browsing();
        if driver.exists(&start) {
            driver.tap(&start)?;
        }
        Ok(())
    });

    map.create_scene(NEW_TAB_SCREEN)?
        .tap(elements::url_field(), URL_BAR_OPEN)
        .tap(elements::toolbar_menu(), NEW_TAB_MENU)
        .tap(elements::tabs_button(), TAB_TRAY);

    // The URL bar closes on submit or cancel.
    map.create_scene(URL_BAR_OPEN)?
        .type_text(format!("{url}\r"), elements::address_field(), BROWSER_TAB)
        .back_gesture(|driver| driver.tap(&elements::cancel()))
        .dismiss_on_use(true);

    map.create_scene(NEW_TAB_MENU)?
        // The menu item fails the existence test, so it is tapped blind.
        .gesture(SETTINGS_SCREEN, |driver| {
            driver.tap(&elements::settings_menu_item())
        })
        .tap(elements::close_menu(), NEW_TAB_SCREEN)
        .dismiss_on_use(true);

    {
        let mut settings = map.create_scene(SETTINGS_SCREEN)?;
        let targets = [
            SEARCH_SETTINGS,
            NEW_TAB_SETTINGS,
            HOME_PAGE_SETTINGS,
            PASSCODE_SETTINGS,
            LOGINS_SETTINGS,
            CLEAR_PRIVATE_DATA_SETTINGS,
            OPEN_WITH_SETTINGS,
        ];
        for (cell, target) in SETTINGS_CELLS.iter().zip(targets) {
            settings.tap(elements::settings_cell(cell), target);
        }
        settings.back_gesture(navigation_back);
    }

    for leaf in [
        SEARCH_SETTINGS,
        NEW_TAB_SETTINGS,
        HOME_PAGE_SETTINGS,
        CLEAR_PRIVATE_DATA_SETTINGS,
        OPEN_WITH_SETTINGS,
    ] {
        map.create_scene(leaf)?.back_gesture(navigation_back);
    }

    map.create_scene(PASSCODE_SETTINGS)?
        .back_gesture(navigation_back)
        .tap(elements::require_passcode_row(), PASSCODE_INTERVAL_SETTINGS);

    // Passcode-protected and effectively modal.
    map.create_scene(PASSCODE_INTERVAL_SETTINGS)?
        .gesture(PASSCODE_SETTINGS, |driver| {
            if driver.exists(&elements::require_passcode_bar()) {
                // Go back, accepting modifications.
                driver.tap(&elements::require_passcode_done())
            } else {
                driver.tap(&elements::enter_passcode_cancel())
            }
        });

    map.create_scene(LOGINS_SETTINGS)?
        .gesture(SETTINGS_SCREEN, |driver| {
            if driver.exists(&elements::login_list()) {
                driver.tap(&elements::logins_back_to_settings())
            } else {
                driver.tap(&elements::enter_passcode_cancel())
            }
        });

    map.create_scene(TAB_TRAY)?
        .tap(elements::tab_tray_menu(), TAB_TRAY_MENU)
        .tap(elements::tab_tray_add_tab(), NEW_TAB_SCREEN);

    map.create_scene(TAB_TRAY_MENU)?
        .tap(elements::settings_menu_item(), SETTINGS_SCREEN)
        .tap(elements::close_menu(), TAB_TRAY)
        .dismiss_on_use(true);

    map.create_scene(BROWSER_TAB)?
        .tap(elements::url_field(), URL_BAR_OPEN)
        .tap(elements::toolbar_menu(), BROWSER_TAB_MENU)
        .tap(elements::tabs_button(), TAB_TRAY);

    // The menu view errors on an existence check, so swipes go through `gesture`.
    map.create_scene(BROWSER_TAB_MENU)?
        .tap(elements::close_menu(), BROWSER_TAB)
        .gesture(BROWSER_TAB_MENU_2, |driver| {
            driver.swipe(&elements::menu_view(), SwipeDirection::Left)
        })
        .dismiss_on_use(true);

    map.create_scene(BROWSER_TAB_MENU_2)?
        .gesture(BROWSER_TAB_MENU, |driver| {
            driver.swipe(&elements::menu_view(), SwipeDirection::Right)
        })
        .tap(elements::settings_menu_item(), SETTINGS_SCREEN)
        .tap(elements::close_menu(), BROWSER_TAB)
        .dismiss_on_use(true);

    map.set_initial_scene(FIRST_RUN);
    debug!(scenes = map.len(), edges = map.edge_count(), "browser screen graph built");
    Ok(map)
}

/// Browser-specific shortcuts on top of [`Navigator::goto`].
pub trait BrowserNavigation {
    /// Load `url` in the first browser tab or new tab screen reached.
    fn open_url(&mut self, url: &str) -> Result<(), NavError>;

    /// Load `url` in a new tab.
    fn open_new_url(&mut self, url: &str) -> Result<(), NavError>;
}

impl<'g, D: UiDriver> BrowserNavigation for Navigator<'g, D> {
    fn open_url(&mut self, url: &str) -> Result<(), NavError> {
        self.goto(URL_BAR_OPEN)?;
        self.driver_mut()
            .type_text(&elements::address_field(), &format!("{url}\r"))?;
        self.now_at(BROWSER_TAB)
    }

    fn open_new_url(&mut self, url: &str) -> Result<(), NavError> {
        self.goto(NEW_TAB_SCREEN)?;
        self.open_url(url)
    }
}
