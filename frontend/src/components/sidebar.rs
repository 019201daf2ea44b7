use std::collections::BTreeSet;

use yew::prelude::*;

/// Content pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Donations,
    InputSettings,
    FormWithContact,
    FormWithoutContact,
    OutputsAll,
    DonationsOutput,
    PhotoGallery,
    Stats,
    Settings,
    Logs,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Donations => "Donations",
            Page::InputSettings => "Input Settings",
            Page::FormWithContact => "Form with Contact Info",
            Page::FormWithoutContact => "Form without Contact Info",
            Page::OutputsAll => "All",
            Page::DonationsOutput => "Donations Output",
            Page::PhotoGallery => "Photo Gallery",
            Page::Stats => "Stats",
            Page::Settings => "Settings",
            Page::Logs => "Logs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub page: Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    Page(Page),
    Submenu(&'static [SubItem]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub target: MenuTarget,
}

pub const MENU: &[MenuItem] = &[
    MenuItem {
        id: "donations",
        label: "Donations",
        icon: "fas fa-home",
        target: MenuTarget::Page(Page::Donations),
    },
    MenuItem {
        id: "input-settings",
        label: "Input Settings",
        icon: "fas fa-chart-bar",
        target: MenuTarget::Page(Page::InputSettings),
    },
    MenuItem {
        id: "forms",
        label: "Forms",
        icon: "fas fa-file-alt",
        target: MenuTarget::Submenu(&[
            SubItem {
                label: "Form with Contact Info",
                icon: "fas fa-file-medical",
                page: Page::FormWithContact,
            },
            SubItem {
                label: "Form without Contact Info",
                icon: "fas fa-file-excel",
                page: Page::FormWithoutContact,
            },
        ]),
    },
    MenuItem {
        id: "outputs",
        label: "Outputs",
        icon: "fas fa-file-alt",
        target: MenuTarget::Submenu(&[
            SubItem {
                label: "All",
                icon: "fas fa-file-alt",
                page: Page::OutputsAll,
            },
            SubItem {
                label: "Donations",
                icon: "fas fa-file-medical",
                page: Page::DonationsOutput,
            },
            SubItem {
                label: "Photo Gallery",
                icon: "fas fa-file-excel",
                page: Page::PhotoGallery,
            },
            SubItem {
                label: "Stats",
                icon: "fas fa-file-alt",
                page: Page::Stats,
            },
        ]),
    },
    MenuItem {
        id: "misc",
        label: "Misc.",
        icon: "fas fa-cog",
        target: MenuTarget::Submenu(&[
            SubItem {
                label: "Settings",
                icon: "fas fa-cog",
                page: Page::Settings,
            },
            SubItem {
                label: "Logs",
                icon: "fas fa-file-alt",
                page: Page::Logs,
            },
        ]),
    },
];

/// Which submenus are unfolded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedMenus(BTreeSet<&'static str>);

impl ExpandedMenus {
    pub fn toggle(&self, id: &'static str) -> Self {
        let mut next = self.0.clone();
        if !next.remove(id) {
            next.insert(id);
        }
        Self(next)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.0.contains(id)
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub open: bool,
    pub active: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let expanded = use_state(ExpandedMenus::default);

    let render_item = |item: &MenuItem| {
        let is_expanded = expanded.is_expanded(item.id);
        let is_active = matches!(item.target, MenuTarget::Page(page) if page == props.active);

        let onclick = {
            let expanded = expanded.clone();
            let on_select = props.on_select.clone();
            let item = *item;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                match item.target {
                    MenuTarget::Submenu(_) => expanded.set(expanded.toggle(item.id)),
                    MenuTarget::Page(page) => on_select.emit(page),
                }
            })
        };

        let submenu = match item.target {
            MenuTarget::Submenu(children) if is_expanded => html! {
                <div class="submenu">
                    {for children.iter().map(|child| {
                        let on_select = props.on_select.clone();
                        let page = child.page;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_select.emit(page);
                        });
                        html! {
                            <a
                                href="#"
                                class={classes!("nav-link", "submenu-link", (child.page == props.active).then_some("active"))}
                                {onclick}
                            >
                                <i class={child.icon}></i>
                                <span>{child.label}</span>
                            </a>
                        }
                    })}
                </div>
            },
            _ => html! {},
        };

        html! {
            <div class="nav-item" key={item.id}>
                <a href="#" class={classes!("nav-link", is_active.then_some("active"))} {onclick}>
                    <i class={item.icon}></i>
                    <div class="submenu-setting">
                        <span>{item.label}</span>
                        {if matches!(item.target, MenuTarget::Submenu(_)) {
                            html! {
                                <i class={classes!(
                                    "submenu-arrow",
                                    if is_expanded { "fas fa-chevron-down rotated" } else { "fas fa-chevron-right" }
                                )}></i>
                            }
                        } else { html! {} }}
                    </div>
                </a>
                {submenu}
            </div>
        }
    };

    html! {
        <aside class={classes!("sidebar", props.open.then_some("open"))}>
            <div class="sidebar-content">
                <h2>{"Super ticker"}</h2>
                <nav class="sidebar-nav">
                    {for MENU.iter().map(render_item)}
                </nav>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expanded_menus() {
        let menus = ExpandedMenus::default().toggle("forms").toggle("misc");
        assert!(menus.is_expanded("forms"));
        assert!(menus.is_expanded("misc"));

        let menus = menus.toggle("forms");
        assert!(!menus.is_expanded("forms"));
        assert!(menus.is_expanded("misc"));
    }

    #[test]
    fn test_menu_reaches_every_page() {
        let mut pages = Vec::new();
        for item in MENU {
            match item.target {
                MenuTarget::Page(page) => pages.push(page),
                MenuTarget::Submenu(children) => pages.extend(children.iter().map(|c| c.page)),
            }
        }
        assert_eq!(pages.len(), 10);
        assert!(pages.contains(&Page::FormWithoutContact));
        assert!(pages.contains(&Page::Logs));
        assert_eq!(Page::default(), Page::Donations);
    }
}
