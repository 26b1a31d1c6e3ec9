//! Progress group card: title, percentage, and a completion bar.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressCardProps {
    pub title: AttrValue,
    pub completed: i32,
    pub total: i32,
    pub percentage: i32,
}

#[function_component(ProgressCard)]
pub fn progress_card(props: &ProgressCardProps) -> Html {
    // Green bar for a finished group, blue otherwise
    let bar_class = if props.percentage == 100 {
        "progress-bar progress-bar-complete"
    } else {
        "progress-bar progress-bar-active"
    };

    html! {
        <div class="card progress-card">
            <div class="progress-card-header">
                <h3>{ props.title.clone() }</h3>
                <span class="progress-percentage">{ format!("{}%", props.percentage) }</span>
            </div>
            <div class="progress-track">
                <div
                    class={bar_class}
                    style={format!("width: {}%", props.percentage.clamp(0, 100))}
                />
            </div>
            <div class="progress-card-footer">
                <span>{ format!("{} הושלמו מתוך {}", props.completed, props.total) }</span>
                <span>{ format!("יחד {} משימות", props.total) }</span>
            </div>
        </div>
    }
}
