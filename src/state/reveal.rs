/// Per-section "already revealed" flags.
#[derive(Default, Debug, Clone)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(sections: usize) -> Self {
        Self {
            revealed: vec![false; sections],
        }
    }

    /// Marks `index` revealed. Only the first call for a section returns `true`.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_section_reveals_once() {
        let mut t = RevealTracker::new(3);
        assert!(t.reveal(1));
        assert!(!t.reveal(1));
        assert!(t.reveal(0));
        assert!(t.reveal(2));
        assert!((0..3).all(|i| !t.reveal(i)));
    }

    #[test]
    fn unknown_section_is_ignored() {
        let mut t = RevealTracker::new(1);
        assert!(!t.reveal(4));
        assert!(t.reveal(0));
    }
}
