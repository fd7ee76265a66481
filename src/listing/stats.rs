/// Raw vs. filtered counts behind the board's header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingStats {
    pub total: usize,
    pub matched: usize,
}

impl ListingStats {
    pub fn new(total: usize, matched: usize) -> Self {
        Self { total, matched }
    }

    /// "1 vaga disponível" / "N vagas disponíveis".
    pub fn available_label(&self) -> String {
        if self.total == 1 {
            format!("{} vaga disponível", self.total)
        } else {
            format!("{} vagas disponíveis", self.total)
        }
    }

    /// Only present while a filter hides some jobs.
    pub fn found_label(&self) -> Option<String> {
        if self.matched == self.total {
            return None;
        }
        Some(if self.matched == 1 {
            format!("{} vaga encontrada", self.matched)
        } else {
            format!("{} vagas encontradas", self.matched)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_only_for_exactly_one() {
        assert_eq!(ListingStats::new(0, 0).available_label(), "0 vagas disponíveis");
        assert_eq!(ListingStats::new(1, 1).available_label(), "1 vaga disponível");
        assert_eq!(ListingStats::new(2, 2).available_label(), "2 vagas disponíveis");
    }

    #[test]
    fn found_label_follows_filtered_count() {
        assert_eq!(ListingStats::new(3, 3).found_label(), None);
        assert_eq!(ListingStats::new(3, 1).found_label().as_deref(), Some("1 vaga encontrada"));
        assert_eq!(ListingStats::new(3, 0).found_label().as_deref(), Some("0 vagas encontradas"));
        assert_eq!(ListingStats::new(4, 2).found_label().as_deref(), Some("2 vagas encontradas"));
    }
}
