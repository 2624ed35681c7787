use serde::Serialize;

/// Running purchase counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub purchased_count: u64,
    pub current_income: u64,
}

impl SessionStats {
    pub(crate) fn record(&mut self, price: u32) {
        self.purchased_count += 1;
        self.current_income += u64::from(price);
    }

    /// Sold share of the room, in percent.
    pub fn occupancy_percentage(&self, total_seats: u64) -> f64 {
        if total_seats == 0 {
            return 0.0;
        }
        self.purchased_count as f64 / total_seats as f64 * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticsSnapshot {
    pub purchased_count: u64,
    pub occupancy_percentage: f64,
    pub current_income: u64,
    pub projected_total_income: u64,
}

impl StatisticsSnapshot {
    /// Percentage with two decimals, halves rounded away from zero.
    pub fn formatted_percentage(&self) -> String {
        let hundredths = (self.occupancy_percentage * 100.0).round() / 100.0;
        format!("{:.2}%", hundredths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(occupancy_percentage: f64) -> StatisticsSnapshot {
        StatisticsSnapshot {
            purchased_count: 0,
            occupancy_percentage,
            current_income: 0,
            projected_total_income: 0,
        }
    }

    #[test]
    fn record_accumulates_price() {
        let mut stats = SessionStats::default();
        stats.record(10);
        stats.record(8);
        assert_eq!(stats.purchased_count, 2);
        assert_eq!(stats.current_income, 18);
        assert_eq!(stats.occupancy_percentage(4), 50.0);
    }

    #[test]
    fn percentage_has_two_decimals() {
        assert_eq!(snapshot(0.0).formatted_percentage(), "0.00%");
        assert_eq!(snapshot(25.0).formatted_percentage(), "25.00%");
        assert_eq!(snapshot(100.0 / 3.0).formatted_percentage(), "33.33%");
        // 1 of 800 seats
        assert_eq!(snapshot(0.125).formatted_percentage(), "0.13%");
    }
}
