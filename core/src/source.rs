use crate::NoiseModule;
use crate::error::{NoiseError, Result};

// Fixed-size set of borrowed source modules for a combinator.
// The referenced modules must outlive the combinator; the borrow checker enforces that through 'a.
#[derive(Clone, Copy)]
pub struct SourceModules<'a, const N: usize> {
    slots: [Option<&'a dyn NoiseModule>; N],
}

impl<'a, const N: usize> SourceModules<'a, N> {
    pub fn new() -> Self {
        Self { slots: [None; N] }
    }

    // All slots connected at once
    pub fn from_modules(modules: [&'a dyn NoiseModule; N]) -> Self {
        Self {
            slots: modules.map(Some),
        }
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    // Connect `module` to slot `index`
    pub fn set(&mut self, index: usize, module: &'a dyn NoiseModule) -> Result<()> {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(module);
                Ok(())
            }
            None => Err(NoiseError::InvalidParam(format!(
                "source module index {index} out of range (module has {N} slots)"
            ))),
        }
    }

    pub fn get(&self, index: usize) -> Option<&'a dyn NoiseModule> {
        self.slots.get(index).copied().flatten()
    }

    // True once every slot is connected
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    // Slot `index` for evaluation.
    // Panics when the slot is unset: evaluating an incomplete tree is a programming error.
    #[inline]
    pub(crate) fn require(&self, index: usize, owner: &str) -> &'a dyn NoiseModule {
        match self.get(index) {
            Some(module) => module,
            None => panic!("{owner}: source module {index} is not set"),
        }
    }
}

impl<const N: usize> Default for SourceModules<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Const2D;

    #[test]
    fn slots_start_unset() {
        let slots = SourceModules::<3>::new();
        assert_eq!(slots.len(), 3);
        assert!(!slots.is_complete());
        assert!(slots.get(0).is_none());
        assert!(slots.get(7).is_none());
    }

    #[test]
    fn set_fills_slots_and_rejects_bad_index() {
        let a = Const2D::new(1.0);
        let b = Const2D::new(-1.0);
        let mut slots = SourceModules::<2>::new();
        slots.set(0, &a).unwrap();
        assert!(!slots.is_complete());
        slots.set(1, &b).unwrap();
        assert!(slots.is_complete());
        assert_eq!(slots.get(1).map(|m| m.get2(0.0, 0.0)), Some(-1.0));
        assert!(matches!(slots.set(2, &a), Err(NoiseError::InvalidParam(_))));
    }

    #[test]
    #[should_panic(expected = "source module 0 is not set")]
    fn require_panics_on_unset_slot() {
        let slots = SourceModules::<1>::new();
        let _ = slots.require(0, "Test2D");
    }
}
