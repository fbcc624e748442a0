/// Rupee formatting helpers.
///
/// Prices are stored as whole rupees (i64); display uses the Indian
/// digit-grouping convention (last three digits, then groups of two):
/// 12345678 -> "₹1,23,45,678".

pub fn group_indian(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        grouped.push(ch);
        let remaining = len - i - 1;
        if remaining == 0 {
            continue;
        }
        // Separator after the leading group boundary: positions where the
        // remaining digit count is 3, 5, 7, ...
        if remaining == 3 || (remaining > 3 && remaining % 2 == 1) {
            grouped.push(',');
        }
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_inr(amount: i64) -> String {
    format!("₹{}", group_indian(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_small_amounts() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1000), "1,000");
    }

    #[test]
    fn groups_lakhs_and_crores() {
        assert_eq!(group_indian(100000), "1,00,000");
        assert_eq!(group_indian(2500000), "25,00,000");
        assert_eq!(group_indian(12345678), "1,23,45,678");
    }

    #[test]
    fn formats_with_rupee_sign() {
        assert_eq!(format_inr(7500000), "₹75,00,000");
        assert_eq!(format_inr(-1000), "₹-1,000");
    }
}
