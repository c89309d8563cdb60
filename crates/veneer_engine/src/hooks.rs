//! Hook installation
//!
//! The engine never modifies the host's compiled form; it asks a thin host
//! adapter to attach interception at a closed set of seams. Installation is
//! fault-isolated per seam: a host build missing one draw overload loses
//! theming for that overload only, never globally.

use thiserror::Error;

/// Every call path the engine intercepts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seam {
    /// Color construction from channel components
    ColorConstruction,
    /// Named-color property lookups (the host fetches its disabled gray
    /// through one of these rather than constructing it)
    NamedColorLookup,
    DrawLine,
    DrawEllipse,
    FillEllipse,
    DrawRectangle,
    FillRectangle,
    DrawText,
    /// Window constructors; fires the tree walker once the native handle
    /// exists
    WindowConstruction,
}

impl Seam {
    pub const ALL: [Seam; 9] = [
        Seam::ColorConstruction,
        Seam::NamedColorLookup,
        Seam::DrawLine,
        Seam::DrawEllipse,
        Seam::FillEllipse,
        Seam::DrawRectangle,
        Seam::FillRectangle,
        Seam::DrawText,
        Seam::WindowConstruction,
    ];
}

/// Why a seam could not be attached
#[derive(Error, Debug)]
pub enum HookError {
    #[error("host rejected the hook: {0}")]
    Rejected(String),

    #[error("call path not present in this host build: {0}")]
    MissingCallPath(String),
}

/// The host adapter's side of installation
///
/// Attaching a seam means wiring that call path to the matching engine
/// entry point (`intercept_color`, `before_draw`, `window_created`).
/// Attachment must be idempotent: attaching an already-attached seam
/// replaces the wiring rather than doubling it.
pub trait HookHost {
    fn attach(&mut self, seam: Seam) -> Result<(), HookError>;
}

/// Outcome of one installation pass
#[derive(Debug, Default)]
pub struct InstallReport {
    pub installed: Vec<Seam>,
    pub failed: Vec<(Seam, HookError)>,
}

impl InstallReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Attach every seam, continuing past per-seam failures
pub fn install(host: &mut dyn HookHost) -> InstallReport {
    let mut report = InstallReport::default();
    for seam in Seam::ALL {
        match host.attach(seam) {
            Ok(()) => report.installed.push(seam),
            Err(err) => {
                tracing::warn!(?seam, %err, "seam left unhooked; theming continues without it");
                report.failed.push((seam, err));
            }
        }
    }
    tracing::debug!(
        installed = report.installed.len(),
        failed = report.failed.len(),
        "hook installation finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlakyHost {
        broken: Vec<Seam>,
        attached: Vec<Seam>,
    }

    impl HookHost for FlakyHost {
        fn attach(&mut self, seam: Seam) -> Result<(), HookError> {
            if self.broken.contains(&seam) {
                return Err(HookError::MissingCallPath(format!("{seam:?}")));
            }
            self.attached.push(seam);
            Ok(())
        }
    }

    #[test]
    fn install_attaches_every_seam_once() {
        let mut host = FlakyHost {
            broken: vec![],
            attached: vec![],
        };
        let report = install(&mut host);
        assert!(report.is_complete());
        assert_eq!(host.attached, Seam::ALL.to_vec());
    }

    #[test]
    fn one_broken_seam_does_not_stop_the_rest() {
        let mut host = FlakyHost {
            broken: vec![Seam::FillEllipse],
            attached: vec![],
        };
        let report = install(&mut host);

        assert!(!report.is_complete());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, Seam::FillEllipse);
        assert_eq!(report.installed.len(), Seam::ALL.len() - 1);
        // Seams after the broken one were still attempted.
        assert!(host.attached.contains(&Seam::WindowConstruction));
    }
}
