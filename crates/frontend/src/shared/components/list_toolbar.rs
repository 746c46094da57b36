//! Filter bar shared by the list pages: search, status/category selects,
//! date range, optional grouping, pager, refresh and export.

use super::date_input::DateInput;
use super::pagination_controls::{PageInfo, PaginationControls};
use crate::shared::icons::icon;
use contracts::shared::data_view::filter::normalize_choice;
use contracts::shared::data_view::{GroupKey, ListViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Select options as `(value, label)`. An empty value means "all".
pub type Choices = Vec<(&'static str, &'static str)>;

/// `all_label` first, then every value labelled by itself.
pub fn choices_with_all(all_label: &'static str, values: &'static [&'static str]) -> Choices {
    let mut choices: Choices = vec![("", all_label)];
    choices.extend(values.iter().map(|s| (*s, *s)));
    choices
}

/// Search box feeding `ListViewState::set_search` after a short pause.
#[component]
fn SearchBox(view_state: RwSignal<ListViewState>, placeholder: &'static str) -> impl IntoView {
    let text = RwSignal::new(view_state.with_untracked(|v| v.filter.search.clone()));
    let generation = StoredValue::new(0u64);

    // Follow external resets ("Clear").
    Effect::new(move |_| {
        let search = view_state.with(|v| v.filter.search.clone());
        if text.get_untracked() != search {
            text.set(search);
        }
    });

    Effect::new(move |_| {
        let value = text.get();
        let current = generation.get_value() + 1;
        generation.set_value(current);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.try_get_value() != Some(current) {
                return;
            }
            let changed = view_state
                .try_with_untracked(|v| v.filter.search != value)
                .unwrap_or(false);
            if changed {
                view_state.update(|v| v.set_search(value));
            }
        });
    });

    view! {
        <Input value=text placeholder=placeholder />
    }
}

/// `<Select>` over `choices` that writes the picked value through `apply`.
/// Only real changes are forwarded, so mounting does not reset the page.
#[component]
fn ChoiceSelect(
    label: &'static str,
    choices: Choices,
    current: Signal<Option<String>>,
    apply: Callback<String>,
    #[prop(optional)]
    normalize: Option<fn(&str) -> Option<String>>,
    /// Options derived from the loaded data, appended after `choices`.
    #[prop(default = None)]
    options: Option<Signal<Vec<String>>>,
) -> impl IntoView {
    let normalize = normalize.unwrap_or(normalize_choice);
    let value = RwSignal::new(current.get_untracked().unwrap_or_default());

    Effect::new(move |_| {
        let picked = value.get();
        if normalize(&picked) != current.get_untracked() {
            apply.run(picked);
        }
    });

    Effect::new(move |_| {
        let wanted = current.get();
        if normalize(&value.get_untracked()) != wanted {
            value.set(wanted.unwrap_or_default());
        }
    });

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Label>{label}</Label>
            <Select value=value size=SelectSize::Small>
                {choices.into_iter().map(|(v, l)| view! { <option value=v>{l}</option> }).collect_view()}
                {move || options.map(|opts| {
                    opts.get()
                        .into_iter()
                        .map(|o| view! { <option value=o.to_lowercase()>{o.clone()}</option> })
                        .collect_view()
                })}
            </Select>
        </Flex>
    }
}

fn group_choice(value: &str) -> Option<String> {
    Some(GroupKey::from_choice(value).as_choice().to_string())
}

#[component]
pub fn ListToolbar(
    view_state: RwSignal<ListViewState>,
    #[prop(into)]
    page_info: Signal<PageInfo>,
    #[prop(into)]
    loading: Signal<bool>,
    on_refresh: Callback<()>,
    #[prop(optional)]
    on_export: Option<Callback<()>>,
    #[prop(optional)]
    search_placeholder: &'static str,
    /// Status filter options; empty hides the select.
    #[prop(optional)]
    status_choices: Choices,
    /// Status values taken from the data, listed after `status_choices`.
    #[prop(optional, into)]
    status_options: Option<Signal<Vec<String>>>,
    #[prop(optional)]
    category_label: &'static str,
    /// Category filter options; empty hides the select.
    #[prop(optional)]
    category_choices: Choices,
    /// Category values taken from the data, listed after `category_choices`.
    #[prop(optional, into)]
    category_options: Option<Signal<Vec<String>>>,
    /// Group-by options; empty hides the select.
    #[prop(optional)]
    group_choices: Choices,
    /// Hide the date range inputs.
    #[prop(optional)]
    no_dates: bool,
) -> impl IntoView {
    let is_expanded = RwSignal::new(true);

    let active_filters_count = Signal::derive(move || view_state.with(|v| v.active_filter_count()));

    let has_status = !status_choices.is_empty() || status_options.is_some();
    let status_select = has_status.then(|| {
        view! {
            <ChoiceSelect
                label="Status"
                choices=status_choices
                options=status_options
                current=Signal::derive(move || view_state.with(|v| v.filter.status.clone()))
                apply=Callback::new(move |s: String| view_state.update(|v| v.set_status(&s)))
            />
        }
    });

    let has_category = !category_choices.is_empty() || category_options.is_some();
    let category_select = has_category.then(|| {
        let label = if category_label.is_empty() { "Category" } else { category_label };
        view! {
            <ChoiceSelect
                label=label
                choices=category_choices
                options=category_options
                current=Signal::derive(move || view_state.with(|v| v.filter.category.clone()))
                apply=Callback::new(move |s: String| view_state.update(|v| v.set_category(&s)))
            />
        }
    });

    let group_select = (!group_choices.is_empty()).then(|| {
        view! {
            <ChoiceSelect
                label="Group by"
                choices=group_choices
                current=Signal::derive(move || view_state.with(|v| Some(v.group_key.as_choice().to_string())))
                normalize=group_choice
                apply=Callback::new(move |s: String| {
                    view_state.update(|v| v.set_group_key(GroupKey::from_choice(&s)))
                })
            />
        }
    });

    let date_inputs = (!no_dates).then(|| {
        view! {
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Created"</Label>
                <Flex gap=FlexGap::Small>
                    <DateInput
                        title="From"
                        value=Signal::derive(move || view_state.with(|v| v.filter.date_from))
                        on_change=move |from| view_state.update(|v| {
                            let to = v.filter.date_to;
                            v.set_date_range(from, to)
                        })
                    />
                    <DateInput
                        title="To"
                        value=Signal::derive(move || view_state.with(|v| v.filter.date_to))
                        on_change=move |to| view_state.update(|v| {
                            let from = v.filter.date_from;
                            v.set_date_range(from, to)
                        })
                    />
                </Flex>
            </Flex>
        }
    });

    let placeholder = if search_placeholder.is_empty() { "Search..." } else { search_placeholder };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="filter-panel__badge">{count}</span> })
                    }}
                </div>

                <div class="filter-panel-header__center">
                    <PaginationControls
                        page_info=page_info
                        on_page_change=Callback::new(move |p: usize| view_state.update(|v| v.go_to(p)))
                    />
                </div>

                <div class="filter-panel-header__right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_refresh.run(())
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                    {on_export.map(|export| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| export.run(())
                            disabled=loading
                        >
                            {icon("download")}
                            " Export"
                        </Button>
                    })}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search"</Label>
                                <SearchBox view_state=view_state placeholder=placeholder />
                            </Flex>
                        </div>
                        {status_select}
                        {category_select}
                        {date_inputs}
                        {group_select}
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| view_state.update(|v| v.clear_filters())
                            disabled=Signal::derive(move || active_filters_count.get() == 0)
                        >
                            {icon("x")}
                            " Clear"
                        </Button>
                    </Flex>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_start_with_all() {
        let choices = choices_with_all("All payments", &["paid", "failed"]);
        assert_eq!(choices, vec![("", "All payments"), ("paid", "paid"), ("failed", "failed")]);
    }
}
