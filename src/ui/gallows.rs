/// Body parts in the drawing: head, torso, two arms, two legs
pub const PARTS: usize = 6;

/// How many parts to draw for `strikes`, scaled so the figure completes
/// exactly on the losing strike whatever the threshold
pub fn parts_shown(strikes: usize, max_strikes: usize) -> usize {
    let losing = max_strikes + 1;
    if strikes >= losing {
        PARTS
    } else {
        strikes * PARTS / losing
    }
}

pub fn gallows_lines(parts: usize) -> Vec<String> {
    let part = |n: usize, c: char| if parts >= n { c } else { ' ' };

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(1, 'O')),
        format!(" {}{}{}  |", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!(" {} {}  |", part(5, '/'), part(6, '\\')),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_default_threshold_one_per_strike() {
        for strikes in 0..=6 {
            assert_eq!(parts_shown(strikes, 5), strikes);
        }
        assert_eq!(parts_shown(9, 5), PARTS);
    }

    #[test]
    fn test_parts_scaled_threshold() {
        assert_eq!(parts_shown(0, 10), 0);
        assert_eq!(parts_shown(5, 10), 2);
        assert_eq!(parts_shown(10, 10), 5);
        assert_eq!(parts_shown(11, 10), PARTS);
        assert_eq!(parts_shown(1, 1), 3);
        assert_eq!(parts_shown(2, 1), PARTS);
    }

    #[test]
    fn test_empty_gallows() {
        let lines = gallows_lines(0);
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|l| !l.contains('O')));
        assert_eq!(lines[3], "      |");
    }

    #[test]
    fn test_full_figure() {
        let lines = gallows_lines(PARTS);
        assert_eq!(lines[2], "  O   |");
        assert_eq!(lines[3], " /|\\  |");
        assert_eq!(lines[4], " / \\  |");
    }

    #[test]
    fn test_all_lines_same_frame_width() {
        for parts in 0..=PARTS {
            let lines = gallows_lines(parts);
            for line in &lines[1..6] {
                assert_eq!(line.chars().count(), 7, "{line:?}");
            }
        }
    }
}
