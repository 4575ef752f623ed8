use super::*;

#[test]
fn severity_css_modifiers() {
    assert_eq!(Severity::Info.as_str(), "info");
    assert_eq!(Severity::Success.as_str(), "success");
    assert_eq!(Severity::Error.as_str(), "error");
}

#[cfg(not(feature = "csr"))]
#[test]
fn toast_notifier_pushes_into_state() {
    Owner::new().with(|| {
        let toasts = RwSignal::new(ToastState::default());
        let notifier = ToastNotifier::new(toasts);

        notifier.notify("User deleted", Severity::Success);
        notifier.notify("Failed", Severity::Error);

        let state = toasts.get_untracked();
        assert_eq!(state.toasts.len(), 2);
        assert_eq!(state.toasts[0].message, "User deleted");
        assert_eq!(state.toasts[1].severity, Severity::Error);
    });
}
