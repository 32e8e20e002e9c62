use leptos::*;
use shared::JobRun;

use crate::components::job_run_detail::JobRunDetail;
use crate::i18n::{provide_i18n, supported_languages, use_i18n};
use crate::theme::{provide_theme, Theme};

const SAMPLE_RUN: &str = include_str!("fixtures/job_run.json");

fn load_sample_run() -> Result<JobRun, serde_json::Error> {
    serde_json::from_str(SAMPLE_RUN)
}

#[component]
pub fn App() -> impl IntoView {
    provide_i18n("en".to_string());
    provide_theme(Theme::default());

    let i18n = use_i18n();
    let i18n_stored = store_value(i18n);

    let content = match load_sample_run() {
        Ok(run) => {
            log::debug!("rendering job run {} with {} task runs", run.id, run.task_runs().len());
            view! { <JobRunDetail run=run /> }.into_view()
        }
        Err(err) => {
            log::error!("failed to parse sample job run: {}", err);
            view! {
                <div class="alert alert-error" role="alert">
                    {move || i18n_stored.get_value().t("job_run.load_failed")}
                </div>
            }.into_view()
        }
    };

    view! {
        <main>
            <header class="navbar">
                <select
                    class="language-select"
                    on:change=move |ev| {
                        let lang = event_target_value(&ev);
                        log::info!("switching language to {}", lang);
                        i18n_stored.get_value().set_language(&lang);
                    }
                >
                    {supported_languages().into_iter().map(|(code, name)| {
                        let selected = move || i18n_stored.get_value().current_language() == code;
                        view! { <option value=code selected=selected>{name}</option> }
                    }).collect_view()}
                </select>
            </header>
            {content}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::RunStatus;

    #[test]
    fn test_sample_run_parses() {
        let run = load_sample_run().unwrap();
        assert_eq!(run.id, 1024);
        assert_eq!(run.task_runs().len(), 3);
        assert_eq!(run.status(), RunStatus::Completed);
        assert_eq!(run.task_runs()[2].status(), RunStatus::Errored);
    }
}
