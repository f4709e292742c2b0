mod scenario;

pub use scenario::{DisplayText, Scenario, ScenarioTexts};

use crate::host::Modal;
use crate::loading::{Completion, LoadingCoordinator};
use assets::LoadBridge;

/// Completion action showing the welcome modal for a scenario.
///
/// It advances the host once so the first frame is valid, shows the modal and
/// leaves the clock frozen until the modal is closed.
pub fn welcome_action(text: DisplayText) -> impl FnOnce(&mut Completion<'_>) + 'static {
    move |done: &mut Completion<'_>| {
        let step = done.config().get_warmup_step();
        let resume_scale = done.config().get_resume_time_scale();
        let modal = Modal {
            title: text.title,
            content: text.content,
            confirm_label: done.config().get_confirm_label().to_string(),
        };

        done.host().advance(step, step);
        done.present_modal(modal, move |host| {
            host.set_time_scale(resume_scale);
            host.set_interface_visible(true);
        });
    }
}

impl<B> LoadingCoordinator<B>
where
    B: LoadBridge,
    B::Artifact: 'static,
{
    /// Shows the welcome modal for `scenario` once loading completes.
    /// The first scenario armed wins, returns false if another one was set.
    pub fn try_arm(&mut self, scenario: &Scenario) -> bool {
        let text = self.texts.resolve(scenario);
        let armed = self.set_completion_action(welcome_action(text));
        if armed {
            log::debug!("Welcome modal armed for scenario '{}'", scenario.name);
        } else {
            log::debug!(
                "Welcome modal for scenario '{}' ignored, another action is armed",
                scenario.name
            );
        }
        armed
    }
}
