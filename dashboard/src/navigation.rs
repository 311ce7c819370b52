//! Static navigation: sidebar menu, breadcrumb trail and tab strip.

use std::rc::Rc;

use celldom::{Element, Style};
use datatable::{HandlerRegistry, ON_CLICK};

/// An entry of the sidebar menu. Entries with children render as a group.
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub children: &'static [MenuItem],
}

impl MenuItem {
    const fn link(title: &'static str, url: &'static str, icon: &'static str) -> Self {
        Self {
            title,
            url,
            icon,
            children: &[],
        }
    }

    const fn sub(title: &'static str, url: &'static str) -> Self {
        Self::link(title, url, "")
    }
}

pub const SIDEBAR: &[MenuItem] = &[
    MenuItem::link("Homepage", "/", "⌂"),
    MenuItem::link("Events", "/events", "▦"),
    MenuItem::link("Organizations", "/organizations", "▣"),
    MenuItem::link("Users", "/users", "☺"),
    MenuItem::link("Services", "/services", "◍"),
    MenuItem::link("Sponsors", "/sponsors", "♦"),
    MenuItem {
        title: "Settings",
        url: "/settings",
        icon: "⚙",
        children: &[
            MenuItem::sub("App Settings", "/app-settings"),
            MenuItem::sub("General Settings", "/general-settings"),
            MenuItem::sub("Commerce Settings", "/commerce-settings"),
            MenuItem::sub("Trading Card Settings", "/trading-card-settings"),
        ],
    },
];

/// A breadcrumb link.
#[derive(Debug, Clone, Copy)]
pub struct Crumb {
    pub label: &'static str,
    pub href: &'static str,
}

pub const GENERAL_SETTINGS_CRUMBS: &[Crumb] = &[
    Crumb {
        label: "Settings",
        href: "#",
    },
    Crumb {
        label: "General Settings",
        href: "/general-settings",
    },
];

/// A selectable tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ORGANIZATION_TYPE_TAB: Tab = Tab {
    value: "organization-type",
    label: "Organization Type",
};

pub const GENERAL_SETTINGS_TABS: &[Tab] = &[
    Tab {
        value: "event-group-type",
        label: "Event Group Type",
    },
    Tab {
        value: "event-group-rating",
        label: "Event Group Rating",
    },
    Tab {
        value: "age-group",
        label: "Age Group",
    },
    Tab {
        value: "match-category",
        label: "Match Category",
    },
    ORGANIZATION_TYPE_TAB,
    Tab {
        value: "main-position",
        label: "Main Position",
    },
];

pub fn find_tab(value: &str) -> Option<&'static Tab> {
    GENERAL_SETTINGS_TABS.iter().find(|tab| tab.value == value)
}

pub fn tab_id(value: &str) -> String {
    format!("tab-{value}")
}

/// Render the sidebar, highlighting the item whose url is `active_url`.
///
/// Groups are always expanded.
pub fn sidebar(items: &[MenuItem], active_url: &str) -> Element {
    let mut lines = Vec::new();
    for item in items {
        lines.push(menu_line(item, active_url, 0));
        for child in item.children {
            lines.push(menu_line(child, active_url, 1));
        }
    }
    Element::col().id("sidebar").children(lines)
}

fn menu_line(item: &MenuItem, active_url: &str, depth: usize) -> Element {
    let marker = if depth == 0 { item.icon } else { "•" };
    let indent = "  ".repeat(depth);
    Element::text(format!("{indent}{marker} {}", item.title))
        .data("url", item.url)
        .active(item.url == active_url)
}

pub fn breadcrumb(crumbs: &[Crumb]) -> Element {
    let mut row = Element::row().id("breadcrumb");
    for (index, crumb) in crumbs.iter().enumerate() {
        if index > 0 {
            row = row.child(Element::text("/").style(Style::new().dim()));
        }
        row = row.child(Element::text(crumb.label).data("href", crumb.href));
    }
    row
}

/// Render the tab strip and register a click handler per tab.
pub fn tab_strip(
    tabs: &[Tab],
    active: &str,
    registry: &HandlerRegistry,
    on_select: impl Fn(&'static str) + 'static,
) -> Element {
    let on_select: Rc<dyn Fn(&'static str)> = Rc::new(on_select);
    let buttons = tabs.iter().map(|tab| {
        let id = tab_id(tab.value);
        let value = tab.value;
        let on_select = Rc::clone(&on_select);
        registry.register(&id, ON_CLICK, Rc::new(move || on_select(value)));

        let style = if tab.value == active {
            Style::new().bold()
        } else {
            Style::default()
        };
        Element::button(tab.label)
            .id(id)
            .active(tab.value == active)
            .style(style)
    });
    Element::row().id("tabs").children(buttons.collect::<Vec<_>>())
}
