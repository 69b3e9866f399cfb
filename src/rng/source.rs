//! Names of the operating system entropy sources behind `OsRng`.

#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn source_name() -> &'static str {
    "getrandom(2)"
}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "openbsd"))]
pub fn source_name() -> &'static str {
    "getentropy(2)"
}

#[cfg(target_os = "windows")]
pub fn source_name() -> &'static str {
    "ProcessPrng"
}

#[cfg(target_os = "freebsd")]
pub fn source_name() -> &'static str {
    "getrandom(2)"
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "openbsd",
    target_os = "windows",
    target_os = "freebsd"
)))]
pub fn source_name() -> &'static str {
    "OS CSPRNG"
}
