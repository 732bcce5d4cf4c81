use leptos::prelude::*;

const EXTERNAL_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];

fn is_external(href: &str) -> bool {
    EXTERNAL_SCHEMES.iter().any(|scheme| href.starts_with(scheme))
}

fn link_target(href: &str) -> Option<&'static str> {
    is_external(href).then_some("_blank")
}

fn link_rel(href: &str) -> Option<&'static str> {
    is_external(href).then_some("noopener noreferrer")
}

/// Bare anchor wrapper. Off-site targets open in a new tab.
#[component]
pub fn LinkBase(
    #[prop(into)] href: String,
    #[prop(into)] aria_label: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = link_target(&href);
    let rel = link_rel(&href);

    view! {
        <a href=href aria-label=aria_label class=class target=target rel=rel>
            {children()}
        </a>
    }
}

#[component]
pub fn TextButton(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] text_class: String,
) -> impl IntoView {
    let base_classes = "group inline-flex items-center cursor-pointer no-underline focus:outline-none";
    let target = link_target(&href);
    let rel = link_rel(&href);

    view! {
        <a class=base_classes href=href target=target rel=rel>
            <span class=text_class>{label}</span>
        </a>
    }
}


#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;

    #[test]
    fn test_text_button_renders_label_and_href() {
        let html = Owner::new().with(|| {
            view! { <TextButton href="https://info.uniswap.org/" label="Analytics" text_class="body-2" /> }
                .to_html()
        });
        assert!(html.contains(r#"href="https://info.uniswap.org/""#));
        assert!(html.contains("Analytics"));
        assert!(html.contains(r#"class="body-2""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn test_link_base_internal_stays_in_tab() {
        let html = Owner::new().with(|| {
            view! {
                <LinkBase href="/docs" aria_label="Docs home" class="group">
                    "Docs"
                </LinkBase>
            }
            .to_html()
        });
        assert!(html.contains(r#"aria-label="Docs home""#));
        assert!(!html.contains("_blank"));
    }
}
