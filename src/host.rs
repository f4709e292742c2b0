//! Collaborators owned by the application. The loading code only talks to
//! them through these traits, so it knows nothing about how the interface is
//! drawn or how the simulation runs.

/// Visibility toggles for the main interface and the loading screen
pub trait InterfaceVisibility {
    fn set_interface_visible(&mut self, visible: bool);
    fn set_loading_screen_visible(&mut self, visible: bool);
}

/// The simulation clock of the host
pub trait HostClock {
    fn set_time_scale(&mut self, scale: f32);
    fn advance(&mut self, delta: f32, unscaled_delta: f32);
}

/// Shows a modal dialog. Closing it is reported back through
/// [`LoadingCoordinator::close_modal`](crate::loading::LoadingCoordinator::close_modal).
pub trait ModalPresenter {
    fn present(&mut self, modal: &Modal);
}

/// Content of a modal dialog
#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    pub title: String,
    pub content: String,
    pub confirm_label: String,
}

/// Bundle of the collaborators used during loading
pub struct Host {
    ui: Box<dyn InterfaceVisibility>,
    clock: Box<dyn HostClock>,
    modal: Box<dyn ModalPresenter>,
}

impl Host {
    pub fn new<U, C, M>(ui: U, clock: C, modal: M) -> Self
    where
        U: InterfaceVisibility + 'static,
        C: HostClock + 'static,
        M: ModalPresenter + 'static,
    {
        Self {
            ui: Box::new(ui),
            clock: Box::new(clock),
            modal: Box::new(modal),
        }
    }

    #[inline]
    pub fn set_interface_visible(&mut self, visible: bool) {
        self.ui.set_interface_visible(visible);
    }

    #[inline]
    pub fn set_loading_screen_visible(&mut self, visible: bool) {
        self.ui.set_loading_screen_visible(visible);
    }

    #[inline]
    pub fn set_time_scale(&mut self, scale: f32) {
        self.clock.set_time_scale(scale);
    }

    #[inline]
    pub fn advance(&mut self, delta: f32, unscaled_delta: f32) {
        self.clock.advance(delta, unscaled_delta);
    }

    #[inline]
    pub fn present(&mut self, modal: &Modal) {
        self.modal.present(modal);
    }
}
