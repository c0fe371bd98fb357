/// Restarts the application; invoked when the user accepts the restart prompt
pub type RestartFn = Box<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartChoice {
    Restart,
    Later,
}

#[derive(Debug, Default)]
pub struct DlgRestartConfirm {
    pub open: bool,
}
