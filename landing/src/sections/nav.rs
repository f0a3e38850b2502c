use super::BRAND;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkKind {
    /// In-page `#fragment`, left to the browser.
    Anchor,
    /// Route inside the app, resolved against the router base.
    Route,
}

/// One entry of the navigation bar (and of the mobile menu).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    href: &'static str,
    label: &'static str,
    class: Option<&'static str>,
    kind: LinkKind,
}

impl NavLink {
    pub fn anchor(href: &'static str, label: &'static str) -> Self {
        Self {
            href,
            label,
            class: None,
            kind: LinkKind::Anchor,
        }
    }

    pub fn route(path: &'static str, label: &'static str) -> Self {
        Self {
            href: path,
            label,
            class: None,
            kind: LinkKind::Route,
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    fn class(&self) -> &'static str {
        self.class.unwrap_or("nav-link")
    }
}

fn render_link(link: NavLink) -> AnyView {
    match link.kind {
        LinkKind::Route => view! {
            <A href=link.href attr:class=link.class()>{link.label}</A>
        }
        .into_any(),
        LinkKind::Anchor => view! {
            <a href=link.href class=link.class()>{link.label}</a>
        }
        .into_any(),
    }
}

#[component]
pub fn Nav(links: Vec<NavLink>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_| set_menu_open.set(false);

    let desktop_links = links.iter().copied().map(render_link).collect_view();
    let mobile_links = links.into_iter().map(render_link).collect_view();

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <A href="/" attr:class="nav-brand">{BRAND}</A>
                <div class="nav-links">{desktop_links}</div>
                <button
                    class=move || if menu_open.get() { "hamburger active" } else { "hamburger" }
                    aria-label="Menü umschalten"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>

        // Mobile menu overlay; a click outside the panel closes it
        <div
            class=move || if menu_open.get() { "mobile-menu active" } else { "mobile-menu" }
            on:click=close_menu
        >
            <div class="mobile-menu-content" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                <button class="mobile-menu-close" aria-label="Menü schließen" on:click=close_menu>
                    "✕"
                </button>
                // Following a link also closes the menu
                <div class="mobile-menu-links" on:click=close_menu>
                    {mobile_links}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_default_to_nav_link_class() {
        assert_eq!(NavLink::anchor("#pricing", "Preise").class(), "nav-link");
        assert_eq!(
            NavLink::route("/membership", "Jetzt starten")
                .with_class("btn-primary")
                .class(),
            "btn-primary"
        );
    }
}
