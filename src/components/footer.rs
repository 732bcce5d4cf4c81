use chrono::{Datelike, Local};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::ui::{LinkBase, TextButton};
use crate::config::{FooterConfig, FooterLinkEntry, FooterSection, SocialKind, FOOTER_CONFIG};

const LINK_TEXT_CLASSES: &str = "body-2 text-light-neutral-2 dark:text-dark-neutral-2 \
     group-hover:text-light-neutral-1 group-hover:dark:text-dark-neutral-1 transition-colors";

pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn copyright_text(year: i32) -> String {
    format!("@{} Uniswap", year)
}

/// Site footer. The year is read from the clock on every render.
#[component]
pub fn Footer() -> impl IntoView {
    view! { <FooterContent config=&FOOTER_CONFIG year=current_year() /> }
}

#[component]
pub fn FooterContent(config: &'static FooterConfig, year: i32) -> impl IntoView {
    view! {
        <footer class="Footer bg-light-surface-1 px-margin-mobile pt-margin-web dark:bg-dark-surface-1 sm:px-margin-web sm:pb-margin-web">
            <h2 class="sr-only">"Footer"</h2>
            <div class="default-grid sm:mb-20">
                // reserved, intentionally empty
                <div class="mb-12 hidden items-start sm:col-span-8 sm:flex md:col-span-4 md:mb-0"></div>
                <div class="col-span-4 sm:col-span-8 sm:flex sm:grid-cols-8 md:col-span-4 justify-end">
                    <nav class="grid w-full grid-cols-3 gap-gap-large sm:grid-cols-3 justify-items-end">
                        {config.has_sections().then(|| view! { <FooterColumns config=config /> })}
                    </nav>
                </div>
            </div>
            <div class="flex flex-col-reverse border-light-surface-3 dark:border-dark-surface-3 sm:flex-row sm:items-center sm:justify-between sm:border-t sm:pt-padding-large">
                <p class="body-3 my-padding-large text-light-neutral-2 dark:text-dark-neutral-2 sm:my-0">
                    {copyright_text(year)}
                </p>
                <SocialLinks config=config />
            </div>
        </footer>
    }
}

#[component]
fn FooterColumns(config: &'static FooterConfig) -> impl IntoView {
    view! {
        <For
            each=move || config.footer_links.iter()
            key=|section| section.title
            children=move |section: &'static FooterSection| {
                view! {
                    <div class="space-y-[0.3125rem] text-right">
                        <h3 class="body-1 text-light-neutral-1 dark:text-dark-neutral-1">
                            {section.title}
                        </h3>
                        <ul class="text-right">
                            <For
                                each=move || section.links.iter()
                                key=|link| link.label
                                children=move |link: &'static FooterLinkEntry| {
                                    view! {
                                        <li class="text-right">
                                            <TextButton
                                                text_class=LINK_TEXT_CLASSES
                                                href=link.href
                                                label=link.label
                                            />
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </div>
                }
            }
        />
    }
}

#[component]
fn SocialLinks(config: &'static FooterConfig) -> impl IntoView {
    let links = config
        .social_links()
        .into_iter()
        .map(|link| {
            let icon = match link.kind {
                SocialKind::Github => icondata_bs::BsGithub,
                SocialKind::X => icondata_bs::BsTwitterX,
                SocialKind::Discord => icondata_bs::BsDiscord,
            };
            view! {
                <LinkBase class="group" href=link.href aria_label=link.kind.aria_label()>
                    <Icon icon=icon width="24" height="24" />
                </LinkBase>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-row space-x-gap-large border-b border-light-surface-3 px-2 py-margin-web dark:border-dark-surface-3 sm:border-0 sm:px-0 sm:py-0">
            {links}
        </div>
    }
}
