//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::{TransactionType, endpoints};

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link {
    url: String,
    title: &'static str,
    is_current: bool,
}

impl Link {
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

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct NavBar {
    links: Vec<Link>,
}

impl NavBar {
    /// Get the navigation bar.
    ///
    /// The link for `active_type` is marked as active and displayed
    /// differently in the HTML.
    pub fn new(active_type: TransactionType) -> NavBar {
        let links = [TransactionType::Expense, TransactionType::Income]
            .into_iter()
            .map(|transaction_type| Link {
                url: endpoints::new_transaction_view(transaction_type),
                title: match transaction_type {
                    TransactionType::Expense => "New Expense",
                    TransactionType::Income => "New Income",
                },
                is_current: transaction_type == active_type,
            })
            .collect();

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a
                        href=(endpoints::ROOT)
                        class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                    {
                        "Expense Tracker"
                    }

                    ul
                        class="font-medium flex flex-row gap-4 lg:gap-8 p-4 lg:p-0"
                    {
                        @for link in self.links {
                            li { (link.into_html()) }
                        }
                    }
                }
            }
        )
    }
}
