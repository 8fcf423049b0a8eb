// Wall clock text for the header, 24h and zero padded ("09:05").
#[inline]
pub fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours % 24, minutes % 60)
}
