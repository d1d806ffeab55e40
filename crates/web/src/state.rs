// =============================================================================
// Stock Tracker Web - Login Form State
// =============================================================================
// Table of Contents:
// 1. Lock Icon
// 2. Form State
// 3. Tests
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Lock Icon
// -----------------------------------------------------------------------------

/// Icon shown at the top of the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockIcon {
    Locked,
    Unlocked,
}

impl LockIcon {
    /// Stable marker rendered as `data-icon` on the icon element.
    pub fn name(&self) -> &'static str {
        match self {
            LockIcon::Locked => "locked",
            LockIcon::Unlocked => "unlocked",
        }
    }

    /// Accessible label.
    pub fn label(&self) -> &'static str {
        match self {
            LockIcon::Locked => "Locked",
            LockIcon::Unlocked => "Unlocked",
        }
    }

    /// Material Design 24x24 path data.
    pub fn svg_path(&self) -> &'static str {
        match self {
            LockIcon::Locked => "M18 8h-1V6c0-2.76-2.24-5-5-5S7 3.24 7 6v2H6c-1.1 0-2 .9-2 2v10c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V10c0-1.1-.9-2-2-2zm-6 9c-1.1 0-2-.9-2-2s.9-2 2-2 2 .9 2 2-.9 2-2 2zm3.1-9H8.9V6c0-1.71 1.39-3.1 3.1-3.1 1.71 0 3.1 1.39 3.1 3.1v2z",
            LockIcon::Unlocked => "M12 17c1.1 0 2-.9 2-2s-.9-2-2-2-2 .9-2 2 .9 2 2 2zm6-9h-1V6c0-2.76-2.24-5-5-5S7 3.24 7 6h1.9c0-1.71 1.39-3.1 3.1-3.1 1.71 0 3.1 1.39 3.1 3.1v2H6c-1.1 0-2 .9-2 2v10c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V10c0-1.1-.9-2-2-2zm0 12H6V10h12v10z",
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Form State
// -----------------------------------------------------------------------------

/// Local state of a single login form instance.
///
/// A fresh instance always starts out logged in, which renders the locked
/// icon. Nothing outside the owning component reads or stores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormState {
    is_logged_in: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self { is_logged_in: true }
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    /// Flip the login flag. Invoked by the login button.
    pub fn toggle(&mut self) {
        self.is_logged_in = !self.is_logged_in;
    }

    /// Icon for the current state. Logged in shows the locked variant.
    pub fn icon(&self) -> LockIcon {
        if self.is_logged_in {
            LockIcon::Locked
        } else {
            LockIcon::Unlocked
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------
