/// Single-collapsible accordion: at most one item open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion<T> {
    open: Option<T>,
}

impl<T> Default for Accordion<T> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<T: Copy + PartialEq> Accordion<T> {
    pub fn open_item(&self) -> Option<T> {
        self.open
    }

    pub fn is_open(&self, item: T) -> bool {
        self.open == Some(item)
    }

    /// Opens `item`, closing whatever was open; toggling the open item
    /// collapses it.
    pub fn toggle(&mut self, item: T) {
        self.open = if self.is_open(item) { None } else { Some(item) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ProjectDetail;

    #[test]
    fn test_starts_collapsed() {
        let accordion = Accordion::<ProjectDetail>::default();
        assert_eq!(accordion.open_item(), None);
        assert!(ProjectDetail::ALL.iter().all(|d| !accordion.is_open(*d)));
    }

    #[test]
    fn test_opening_one_closes_the_other() {
        let mut accordion = Accordion::default();
        accordion.toggle(ProjectDetail::Goals);
        assert!(accordion.is_open(ProjectDetail::Goals));

        accordion.toggle(ProjectDetail::Outcomes);
        assert!(accordion.is_open(ProjectDetail::Outcomes));
        assert!(!accordion.is_open(ProjectDetail::Goals));
    }

    #[test]
    fn test_toggling_open_item_collapses() {
        let mut accordion = Accordion::default();
        accordion.toggle(ProjectDetail::Challenges);
        accordion.toggle(ProjectDetail::Challenges);
        assert_eq!(accordion.open_item(), None);
    }
}
