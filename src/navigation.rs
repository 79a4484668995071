//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::{endpoints, theme::Theme};

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white bg-blue-700 rounded-sm lg:bg-transparent
        lg:text-blue-700 lg:p-0 dark:text-white lg:dark:text-blue-500"
        } else {
            "block py-2 px-3 text-gray-900 rounded-sm hover:bg-gray-100
        lg:hover:bg-transparent lg:border-0 lg:hover:text-blue-700 lg:p-0
        dark:text-white lg:dark:hover:text-blue-500 dark:hover:bg-gray-700
        dark:hover:text-white lg:dark:hover:bg-transparent"
        };

        html!( a href=(self.url) class=(style) { (self.title) } )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
    theme: Theme,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML. `theme` is
    /// the current theme preference, used to pick the toggle button icon.
    pub fn new(active_endpoint: &str, theme: Theme) -> NavBar<'_> {
        let links = vec![
            Link {
                url: endpoints::EXPENSES_VIEW,
                title: "Expenses",
                is_current: active_endpoint == endpoints::EXPENSES_VIEW,
            },
            Link {
                url: endpoints::DASHBOARD_VIEW,
                title: "Dashboard",
                is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
            },
        ];

        NavBar { links, theme }
    }

    pub fn into_html(self) -> Markup {
        let links = self.links;
        let theme_icon = match self.theme {
            Theme::Dark => "☀",
            Theme::Light => "🌙",
        };

        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a
                        href="/"
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                    {
                        span
                            class="flex items-center justify-center h-8 w-8 rounded-full
                            bg-blue-100 text-blue-700 font-medium dark:bg-blue-900
                            dark:text-blue-300"
                        {
                            "$"
                        }

                        span
                            class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                        {
                            "Spendlog"
                        }
                    }

                    div class="flex items-center gap-4"
                    {
                        ul
                            class="font-medium flex flex-row space-x-8 rtl:space-x-reverse"
                        {
                            @for link in links.into_iter() {
                                li { (link.into_html()) }
                            }
                        }

                        button
                            type="button"
                            aria-label="Toggle theme"
                            hx-post=(endpoints::TOGGLE_THEME)
                            hx-swap="none"
                            class="p-2 rounded-lg text-gray-500 hover:bg-gray-100
                            dark:text-gray-400 dark:hover:bg-gray-700 cursor-pointer"
                        {
                            (theme_icon)
                        }
                    }
                }
            }
        )
    }
}

#[cfg(test)]
mod nav_bar_tests {
    use std::collections::HashMap;

    use scraper::{Html, Selector};

    use crate::{endpoints, navigation::NavBar, theme::Theme};

    #[test]
    fn set_active_endpoint() {
        let mut cases = HashMap::new();
        cases.insert(endpoints::DASHBOARD_VIEW, true);
        cases.insert(endpoints::EXPENSES_VIEW, true);

        cases.insert(endpoints::ROOT, false);
        cases.insert(endpoints::NEW_EXPENSE_VIEW, false);
        cases.insert(endpoints::EXPENSES_API, false);
        cases.insert(endpoints::TOGGLE_THEME, false);

        for (endpoint, should_be_active) in cases {
            let nav_bar = NavBar::new(endpoint, Theme::Light);

            assert_link_active(nav_bar, endpoint, should_be_active);
        }
    }

    #[test]
    fn theme_toggle_posts_to_theme_endpoint() {
        let nav_bar = NavBar::new(endpoints::EXPENSES_VIEW, Theme::Light);

        let document = Html::parse_fragment(&nav_bar.into_html().into_string());

        let selector = Selector::parse("button[hx-post]").unwrap();
        let button = document
            .select(&selector)
            .next()
            .expect("no theme toggle button");
        assert_eq!(
            button.value().attr("hx-post"),
            Some(endpoints::TOGGLE_THEME)
        );
    }

    #[track_caller]
    fn assert_link_active(nav_bar: NavBar<'_>, endpoint: &str, should_be_active: bool) {
        let get_active_string = |is_active: bool| -> &str {
            if is_active {
                "active (true)"
            } else {
                "inactive (false)"
            }
        };

        for link in nav_bar.links {
            if link.url == endpoint {
                assert_eq!(
                    link.is_current,
                    should_be_active,
                    "Link for current page should be {} but got {}",
                    get_active_string(should_be_active),
                    get_active_string(link.is_current),
                )
            } else {
                assert!(
                    !link.is_current,
                    "Link for inactive page should {} but got {}",
                    get_active_string(false),
                    get_active_string(link.is_current)
                )
            }
        }
    }
}
