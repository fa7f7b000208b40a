//! Shimmer placeholders for content that is still loading.

#[cfg(test)]
#[path = "skeleton_test.rs"]
mod skeleton_test;

use leptos::prelude::*;

/// A single shimmering block; size it with `class`.
#[component]
pub fn Skeleton(#[prop(into, optional)] class: String) -> impl IntoView {
    view! { <div class=format!("skeleton {class}")></div> }
}

/// Card-shaped placeholder with a title line and `lines - 1` body lines.
#[component]
pub fn ShimmerCard(#[prop(optional)] show_avatar: bool, #[prop(default = 3)] lines: usize) -> impl IntoView {
    view! {
        <div class="shimmer-card">
            <Show when=move || show_avatar>
                <Skeleton class="skeleton--avatar"/>
            </Show>
            <div class="shimmer-card__lines">
                {card_line_classes(lines)
                    .into_iter()
                    .map(|class| view! { <Skeleton class=class/> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Stack of `count` list-row placeholders.
#[component]
pub fn ShimmerList(
    #[prop(default = 5)] count: usize,
    #[prop(optional)] show_avatar: bool,
    #[prop(optional)] show_actions: bool,
) -> impl IntoView {
    view! {
        <div class="shimmer-list">
            {(0..count)
                .map(move |_| {
                    view! {
                        <div class="shimmer-list__row">
                            <Show when=move || show_avatar>
                                <Skeleton class="skeleton--avatar-sm"/>
                            </Show>
                            <div class="shimmer-list__text">
                                <Skeleton class="skeleton--line w-1-3"/>
                                <Skeleton class="skeleton--line-sm w-1-2"/>
                            </div>
                            <Show when=move || show_actions>
                                <div class="shimmer-list__actions">
                                    <Skeleton class="skeleton--icon"/>
                                    <Skeleton class="skeleton--icon"/>
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Table placeholder of `rows` x `columns` cells.
#[component]
pub fn ShimmerTable(
    #[prop(default = 5)] rows: usize,
    #[prop(default = 4)] columns: usize,
    #[prop(default = true)] show_header: bool,
) -> impl IntoView {
    view! {
        <div class="shimmer-table">
            <table>
                <Show when=move || show_header>
                    <thead>
                        <tr>
                            {(0..columns)
                                .map(|_| view! { <th><Skeleton class="skeleton--line w-20"/></th> })
                                .collect_view()}
                        </tr>
                    </thead>
                </Show>
                <tbody>
                    {(0..rows)
                        .map(move |_| {
                            view! {
                                <tr>
                                    {(0..columns)
                                        .map(|col| view! { <td><Skeleton class=table_cell_class(col)/></td> })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// Line widths for a card with `lines` lines (title plus up to three body
/// lines; fewer than two lines still renders title and one body line).
fn card_line_classes(lines: usize) -> Vec<&'static str> {
    let mut classes = vec!["skeleton--title w-3-4", "skeleton--line w-full"];
    if lines > 2 {
        classes.push("skeleton--line w-5-6");
    }
    if lines > 3 {
        classes.push("skeleton--line w-4-6");
    }
    classes
}

fn table_cell_class(column: usize) -> &'static str {
    if column == 0 { "skeleton--line w-32" } else { "skeleton--line w-24" }
}
