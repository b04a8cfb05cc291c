use yew::prelude::*;

use crate::content::{ProcessGroup, SkillGroup};
use crate::skills::{star_marks, Selection};

#[derive(Properties, PartialEq)]
pub struct SkillSectionProps {
    pub group: SkillGroup,
}

#[function_component(SkillSection)]
fn skill_section(props: &SkillSectionProps) -> Html {
    let selection = use_state(|| Selection::new(props.group.entries.len()));

    let tabs = props.group.entries.iter().enumerate().map(|(index, entry)| {
        let onclick = {
            let selection = selection.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(next) = selection.select(index) {
                    selection.set(next);
                }
            })
        };

        html! {
            <li>
                <button
                    class={classes!("skill-tab-item", selection.is_active(index).then_some("active"))}
                    type="button"
                    data-skill={entry.id.clone()}
                    {onclick}
                >
                    {entry.label.clone()}
                </button>
            </li>
        }
    });

    let details = props.group.entries.iter().enumerate().map(|(index, entry)| {
        html! {
            <div
                id={entry.id.clone()}
                class={classes!("skill-detail-content", selection.is_active(index).then_some("active"))}
            >
                <h4 class="skill-detail-title" data-star={entry.stars.to_string()}>
                    {entry.label.clone()}
                    <span class="star-container" aria-label={format!("{} of 5", entry.stars)}>
                        { for star_marks(entry.stars).into_iter().map(|filled| html! {
                            <span class={classes!("star", filled.then_some("filled"))}>{"★"}</span>
                        }) }
                    </span>
                </h4>
                <p>{entry.detail.clone()}</p>
            </div>
        }
    });

    html! {
        <section class="skill-section">
            <h3>{props.group.name.clone()}</h3>
            <ul class="skill-tab-list">{ for tabs }</ul>
            <div class="skill-detail">{ for details }</div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub groups: Vec<SkillGroup>,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    if props.groups.is_empty() {
        return html! {};
    }

    html! {
        <section id="skills" class="skills" aria-label="Skills">
            { for props.groups.iter().map(|group| html! {
                <SkillSection group={group.clone()} />
            }) }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProcessSectionProps {
    pub group: ProcessGroup,
}

#[function_component(ProcessSection)]
fn process_section(props: &ProcessSectionProps) -> Html {
    let selection = use_state(|| Selection::new(props.group.steps.len()));

    html! {
        <section class="process-section">
            <h3>{props.group.name.clone()}</h3>
            <ol class="process-list">
                { for props.group.steps.iter().enumerate().map(|(index, step)| {
                    let onclick = {
                        let selection = selection.clone();
                        Callback::from(move |_: MouseEvent| {
                            if let Some(next) = selection.select(index) {
                                selection.set(next);
                            }
                        })
                    };
                    html! {
                        <li
                            class={classes!("process-item", selection.is_active(index).then_some("active"))}
                            {onclick}
                        >
                            <p class="process-title">{step.title.clone()}</p>
                            <p class="process-body">{step.body.clone()}</p>
                        </li>
                    }
                }) }
            </ol>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProcessProps {
    pub groups: Vec<ProcessGroup>,
}

#[function_component(Process)]
pub fn process(props: &ProcessProps) -> Html {
    if props.groups.is_empty() {
        return html! {};
    }

    html! {
        <section id="process" class="process" aria-label="Process">
            { for props.groups.iter().map(|group| html! {
                <ProcessSection group={group.clone()} />
            }) }
        </section>
    }
}
