//! Task Forms Component
//!
//! Assign a new task to an employee, or move an existing task's status.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriBridge;
use crate::handlers;
use crate::store::use_dashboard_store;

const TASK_STATUSES: &[&str] = &["todo", "in_progress", "review", "done"];

#[component]
pub fn TaskForms() -> impl IntoView {
    let store = use_dashboard_store();

    let (employee, set_employee) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());

    let (task_id, set_task_id) = signal(String::new());
    let (status, set_status) = signal(TASK_STATUSES[0].to_string());

    let assign = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let employee = employee.get_untracked();
        let description = description.get_untracked();
        let due = due_date.get_untracked();
        spawn_local(async move {
            handlers::assign_task(&TauriBridge, store, employee, description, due).await;
        });
    };

    let update = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = task_id.get_untracked();
        let next = status.get_untracked();
        spawn_local(async move {
            handlers::update_task_status(&TauriBridge, store, id, next).await;
        });
    };

    view! {
        <section class="panel task-panel">
            <h2>"Assign Task"</h2>
            <form class="assign-form" on:submit=assign>
                <input
                    id="task-employee"
                    type="text"
                    placeholder="Employee id"
                    prop:value=move || employee.get()
                    on:input=move |ev| set_employee.set(event_target_value(&ev))
                />
                <input
                    id="task-description"
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <input
                    id="task-due-date"
                    type="date"
                    prop:value=move || due_date.get()
                    on:input=move |ev| set_due_date.set(event_target_value(&ev))
                />
                <button type="submit">"Assign"</button>
            </form>

            <h2>"Update Status"</h2>
            <form class="status-form" on:submit=update>
                <input
                    id="update-task-id"
                    type="text"
                    placeholder="Task id"
                    prop:value=move || task_id.get()
                    on:input=move |ev| set_task_id.set(event_target_value(&ev))
                />
                <select
                    id="update-task-status"
                    prop:value=move || status.get()
                    on:change=move |ev| set_status.set(event_target_value(&ev))
                >
                    {TASK_STATUSES.iter().map(|&s| view! { <option value=s>{s}</option> }).collect_view()}
                </select>
                <button type="submit">"Update"</button>
            </form>
        </section>
    }
}
