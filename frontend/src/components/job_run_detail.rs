use leptos::*;
use shared::{JobRun, RunStatus, TaskRun};

use crate::components::status_item::StatusItem;
use crate::components::typography::Typography;
use crate::i18n::use_i18n;

fn task_summary(task: &TaskRun) -> String {
    format!("{} ({})", task.dot_id, task.task_type)
}

/// Detail text shown when a task run is expanded: the error, else the output.
fn task_detail(task: &TaskRun) -> Option<String> {
    task.error.clone().or_else(|| task.output_display())
}

/// Created/finished times. An unfinished run shows its status instead.
#[component]
fn RunTimes(created: String, finished: Option<String>, status: RunStatus) -> impl IntoView {
    let i18n_stored = store_value(use_i18n());

    view! {
        <dl class="run-times">
            <dt>{move || i18n_stored.get_value().t("job_run.created_at")}</dt>
            <dd class="run-created">{created}</dd>
            <dt>{move || i18n_stored.get_value().t("job_run.finished_at")}</dt>
            <dd class="run-finished">
                {move || finished.clone().unwrap_or_else(|| i18n_stored.get_value().status_label(status))}
            </dd>
        </dl>
    }
}

#[component]
fn TaskRunItem(task: TaskRun) -> impl IntoView {
    let status = task.status();
    let detail = task_detail(&task);

    view! {
        <StatusItem status=status.as_str() summary=task_summary(&task)>
            <RunTimes created=task.created_display() finished=task.finished_display() status=status />
            {detail.map(|detail| view! { <pre class="task-run-detail">{detail}</pre> })}
        </StatusItem>
    }
}

/// A job run followed by its task runs, one status item each.
#[component]
pub fn JobRunDetail(run: JobRun) -> impl IntoView {
    let i18n = use_i18n();
    let i18n_stored = store_value(i18n);

    let run_id = run.id;
    let pipeline_spec_id = run.pipeline_spec_id;
    let status = run.status();
    let created = run.created_display();
    let finished = run.finished_display();
    let inputs = run.inputs_display();
    let outputs = run
        .output_strings()
        .into_iter()
        .map(|output| output.unwrap_or_else(|| "null".to_string()))
        .collect::<Vec<_>>();
    let errors = run.error_strings();
    let tasks = run.task_runs().to_vec();
    let observation_source = run.observation_source;

    view! {
        <section class="job-run-detail">
            <StatusItem
                status=status.as_str()
                summary=move || format!("{} {}", i18n_stored.get_value().t("job_run.title"), run_id)
            >
                <div class="job-run-section">
                    <h4>{move || i18n_stored.get_value().t("job_run.pipeline_spec")}</h4>
                    <Typography class="job-run-pipeline-spec">{pipeline_spec_id}</Typography>
                </div>
                <RunTimes created=created finished=finished status=status />
                <div class="job-run-section">
                    <h4>{move || i18n_stored.get_value().t("job_run.inputs")}</h4>
                    <pre class="job-run-inputs">{inputs}</pre>
                </div>
                <div class="job-run-section">
                    <h4>{move || i18n_stored.get_value().t("job_run.outputs")}</h4>
                    <ul class="job-run-outputs">
                        {outputs.into_iter().map(|output| view! { <li>{output}</li> }).collect_view()}
                    </ul>
                </div>
                <div class="job-run-section">
                    <h4>{move || i18n_stored.get_value().t("job_run.errors")}</h4>
                    {if errors.is_empty() {
                        view! {
                            <Typography>{move || i18n_stored.get_value().t("job_run.no_errors")}</Typography>
                        }.into_view()
                    } else {
                        view! {
                            <ul class="job-run-errors">
                                {errors.into_iter().map(|error| view! { <li>{error}</li> }).collect_view()}
                            </ul>
                        }.into_view()
                    }}
                </div>
                <div class="job-run-section">
                    <h4>{move || i18n_stored.get_value().t("job_run.observation_source")}</h4>
                    <pre class="job-run-observation-source">{observation_source}</pre>
                </div>
            </StatusItem>
            {if tasks.is_empty() {
                view! {
                    <Typography class="job-run-empty">
                        {move || i18n_stored.get_value().t("job_run.no_task_runs")}
                    </Typography>
                }.into_view()
            } else {
                tasks
                    .into_iter()
                    .map(|task| view! { <TaskRunItem task=task /> })
                    .collect_view()
            }}
        </section>
    }
}
