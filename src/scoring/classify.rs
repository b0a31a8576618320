use crate::types::scoring::Disposition;

pub const FAST_TRACK_ABOVE: f64 = 80.0;
pub const REVIEW_ABOVE: f64 = 60.0;

pub fn classify(score: f64) -> Disposition {
    if score > FAST_TRACK_ABOVE {
        Disposition::FastTrack
    } else if score > REVIEW_ABOVE {
        Disposition::Review
    } else {
        Disposition::Reject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_fall_to_the_lower_tier() {
        assert_eq!(classify(80.0), Disposition::Review);
        assert_eq!(classify(80.01), Disposition::FastTrack);
        assert_eq!(classify(60.0), Disposition::Reject);
        assert_eq!(classify(60.01), Disposition::Review);
    }

    #[test]
    fn total_over_out_of_range_inputs() {
        assert_eq!(classify(-5.0), Disposition::Reject);
        assert_eq!(classify(150.0), Disposition::FastTrack);
        assert_eq!(classify(f64::NAN), Disposition::Reject);
    }
}
