use std::rc::Rc;

use chrono::NaiveDate;
use shared::calendar::{DayCell, NO_CLASSES_MESSAGE};
use shared::{CalendarRenderer, CalendarView, DateKey, DayDetails, GridCell, MonthGrid, Schedule, SiteConfig};
use tracing::{debug, error};
use web_sys::Element;
use yew::prelude::*;

use crate::services::dom;

pub const GRID_ID: &str = "calendar-grid";
pub const DETAILS_ID: &str = "calendar-details";

/// Renders calendar cells and the details panel as Yew markup.
pub struct HtmlRenderer {
    pub on_select: Callback<DateKey>,
}

impl HtmlRenderer {
    fn day_cell(&self, day: &DayCell, selected: bool) -> Html {
        let key = day.key;
        let onclick = {
            let on_select = self.on_select.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(key))
        };

        html! {
            <div
                class={classes!("calendar-day", day.has_class().then_some("has-class"), selected.then_some("selected"))}
                data-date={key.to_string()}
                {onclick}
            >
                <div class="calendar-day-number">{ day.day() }</div>
                { for day.classes.iter().map(|class| html! {
                    <div class="calendar-class-item">
                        <span class="calendar-class-dot" style={format!("background: {}", class.difficulty.color())}></span>
                        <span class="calendar-class-name">{ &class.name }</span>
                    </div>
                }) }
            </div>
        }
    }
}

impl CalendarRenderer for HtmlRenderer {
    type Output = Html;

    fn render_grid(&self, cells: &[GridCell], view: &CalendarView) -> Html {
        cells
            .iter()
            .map(|cell| match cell {
                GridCell::Weekday(label) => html! { <div class="calendar-weekday">{ *label }</div> },
                GridCell::Blank => html! { <div class="calendar-day empty"></div> },
                GridCell::Day(day) => self.day_cell(day, view.is_selected(&day.key)),
            })
            .collect()
    }

    fn render_details(&self, details: &DayDetails) -> Html {
        match details {
            DayDetails::Empty => html! {
                <p class="calendar-details-text">{ NO_CLASSES_MESSAGE }</p>
            },
            DayDetails::Classes { heading, items } => html! {
                <div class="calendar-details-body">
                    <strong class="calendar-details-date">{ heading }</strong>
                    <ul class="calendar-details-list">
                        { for items.iter().map(|item| html! {
                            <li>
                                <span class={classes!("legend-dot", item.difficulty.legend_class())}></span>
                                <strong>{ &item.name }</strong>
                                if let Some(time) = &item.time {
                                    <span class="calendar-details-time">{ time }</span>
                                }
                            </li>
                        }) }
                    </ul>
                </div>
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub schedule: Rc<Schedule>,
    pub month: MonthGrid,
    /// Element the day details are portalled into.
    pub details_host: Element,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let view = use_state(CalendarView::default);
    let cells = use_memo((props.month, props.schedule.clone()), |(month, schedule)| {
        month.cells(schedule)
    });

    let on_select = {
        let view = view.clone();
        let details_host = props.details_host.clone();
        Callback::from(move |key: DateKey| {
            let mut next = (*view).clone();
            let change = next.select(key);
            if change.previous.is_none() {
                // Drop the static placeholder before the first details render.
                details_host.set_inner_html("");
            }
            debug!(
                "Calendar selection {} -> {}",
                change.previous.map(|k| k.to_string()).unwrap_or_else(|| "none".into()),
                change.current
            );
            view.set(next);
        })
    };

    let renderer = HtmlRenderer { on_select };
    let details = view
        .selected()
        .map(|key| DayDetails::for_day(&key, props.schedule.classes_on(&key)));

    html! {
        <>
            { renderer.render_grid(&cells, &view) }
            if let Some(details) = details {
                { yew::create_portal(renderer.render_details(&details), props.details_host.clone()) }
            }
        </>
    }
}

/// Build this month's schedule and mount the calendar over `#calendar-grid`,
/// with details going to `#calendar-details`. Needs both regions.
pub fn setup_calendar(config: &SiteConfig, today: NaiveDate) {
    let (Some(grid), Some(details_host)) = (dom::by_id(GRID_ID), dom::by_id(DETAILS_ID)) else {
        return;
    };

    let schedule = Schedule::from_config(config, today).unwrap_or_else(|err| {
        error!("Error building class schedule: {}", err);
        Schedule::default()
    });
    let month = MonthGrid::containing(today);

    set_month_header(&month.title());
    dom::set_class(&grid, "calendar-grid", true);

    yew::Renderer::<Calendar>::with_root_and_props(
        grid,
        CalendarProps {
            schedule: Rc::new(schedule),
            month,
            details_host,
        },
    )
    .render();
}

fn set_month_header(title: &str) {
    let Some(header) = dom::query(".calendar-month-header") else {
        return;
    };
    match header.query_selector("strong").ok().flatten() {
        Some(strong) => strong.set_text_content(Some(title)),
        None => header.set_inner_html(&format!("<strong>{title}</strong>")),
    }
}
