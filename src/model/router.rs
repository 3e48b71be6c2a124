//! Routes the pH of whichever solution is selected to a single observable value.

use std::rc::Rc;

use crate::chemistry::{AqueousSolution, ChemistryResult, SolutionKind, SolutionRegistry};
use crate::reactive::{Observer, ObserverId, ReactiveValue, ReadOnlyValue};

/// Where the pH forwarder is currently attached.
#[derive(Debug, Clone, Copy)]
struct Attachment {
    kind: SolutionKind,
    id: ObserverId,
}

/// Keeps `ph` equal to the pH of the selected solution.
///
/// Exactly one solution carries the forwarding observer at any time. A switch
/// detaches it from the old solution, records the new kind, attaches it to the
/// new solution and republishes the new pH, then announces the kind change.
/// Observers of either value therefore never see the new kind paired with the
/// old pH.
///
/// # Example
/// ```
/// use std::rc::Rc;
/// use acid_base_solutions::chemistry::{SolutionKind, SolutionRegistry};
/// use acid_base_solutions::config::ChemistryParameters;
/// use acid_base_solutions::model::ActiveSolutionRouter;
///
/// let registry = Rc::new(SolutionRegistry::general(&ChemistryParameters::default()));
/// let mut router = ActiveSolutionRouter::new(registry, SolutionKind::Water).unwrap();
/// assert_eq!(router.ph(), 7.0);
///
/// router.set_kind(SolutionKind::WeakAcid).unwrap();
/// assert!((router.ph() - 4.5).abs() < 1e-2);
/// ```
pub struct ActiveSolutionRouter {
    registry: Rc<SolutionRegistry>,
    selected: ReactiveValue<SolutionKind>,
    ph: ReactiveValue<f64>,
    forwarder: Observer<f64>,
    attachment: Attachment,
}

impl ActiveSolutionRouter {
    /// Select `default_kind` and start forwarding its pH.
    pub fn new(registry: Rc<SolutionRegistry>, default_kind: SolutionKind) -> ChemistryResult<Self> {
        let solution = registry.try_get(default_kind)?;
        let ph = ReactiveValue::new(solution.ph());

        let target = ph.clone();
        let forwarder: Observer<f64> = Rc::new(move |new_ph, _| {
            target.set(*new_ph);
        });
        let id = solution.ph_value().subscribe_rc(Rc::clone(&forwarder));

        Ok(Self {
            selected: ReactiveValue::new(default_kind),
            ph,
            forwarder,
            attachment: Attachment {
                kind: default_kind,
                id,
            },
            registry,
        })
    }

    pub fn registry(&self) -> &Rc<SolutionRegistry> {
        &self.registry
    }

    pub fn selected_kind(&self) -> SolutionKind {
        self.selected.get()
    }

    /// Observable selected kind.
    pub fn selected_kind_value(&self) -> ReadOnlyValue<SolutionKind> {
        self.selected.read_only()
    }

    /// pH of the selected solution.
    pub fn ph(&self) -> f64 {
        self.ph.get()
    }

    /// Observable pH of the selected solution.
    pub fn ph_value(&self) -> ReadOnlyValue<f64> {
        self.ph.read_only()
    }

    /// The selected solution.
    pub fn active(&self) -> &AqueousSolution {
        self.registry.get(self.attachment.kind)
    }

    /// Kind whose pH is currently forwarded.
    pub fn attached_kind(&self) -> SolutionKind {
        self.attachment.kind
    }

    /// Whether the forwarder is attached to the solution of `kind`.
    pub fn is_forwarding_from(&self, kind: SolutionKind) -> bool {
        self.registry
            .try_get(kind)
            .map(|solution| solution.ph_value().is_subscribed(self.attachment.id) && kind == self.attachment.kind)
            .unwrap_or(false)
    }

    /// Select another solution. Selecting the current kind is a no-op.
    pub fn set_kind(&mut self, kind: SolutionKind) -> ChemistryResult<()> {
        self.registry.try_get(kind)?;
        if kind != self.selected.get() {
            self.switch_to(kind);
        }
        Ok(())
    }

    /// Re-read the selected solution's pH after its inputs changed in place.
    pub fn notify_strength_or_concentration_changed(&self) {
        self.ph.set(self.active().ph());
    }

    /// Reset every solution and return to the initial selection.
    pub fn reset(&mut self) {
        self.registry.reset_all();
        let initial = self.selected.initial();
        if initial != self.selected.get() {
            self.switch_to(initial);
        }
        self.notify_strength_or_concentration_changed();
    }

    /// `kind` must be registered.
    fn switch_to(&mut self, kind: SolutionKind) {
        let previous = self.attachment;

        self.registry
            .get(previous.kind)
            .ph_value()
            .unsubscribe(previous.id);

        let old_kind = self.selected.replace_quietly(kind);

        let solution = self.registry.get(kind);
        let id = solution.ph_value().subscribe_rc(Rc::clone(&self.forwarder));
        self.attachment = Attachment { kind, id };

        self.ph.set(solution.ph());
        log::debug!("solution switched {} -> {}, pH {:.2}", old_kind, kind, self.ph.get());

        self.selected.notify_from(&old_kind);
    }
}

impl Drop for ActiveSolutionRouter {
    fn drop(&mut self) {
        if let Ok(solution) = self.registry.try_get(self.attachment.kind) {
            solution.ph_value().unsubscribe(self.attachment.id);
        }
    }
}
