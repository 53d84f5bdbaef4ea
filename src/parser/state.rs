/// URL parser state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// First byte of the input
    Start,
    /// Inside a candidate scheme
    Scheme,
    /// Just past the scheme's `:`
    SchemeColon,
    /// Past the first `/` after the scheme colon
    SlashSlash,
    /// Authority begins here
    AuthorityStart,
    /// Userinfo (up to the last `@`) or the host itself
    UserinfoOrHost,
    /// Registered name or IPv4 literal
    Host,
    /// Bracketed IPv6 literal
    HostIpv6,
    /// Port digits
    Port,
    /// Path state
    Path,
    /// Query state
    Query,
    /// Fragment state
    Fragment,
    /// Whole input consumed
    Done,
}
