/// Proleptic Gregorian leap-year rule. Years use astronomical numbering
/// (`0` is 1 BC, `-4` is 5 BC).
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[inline]
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}
