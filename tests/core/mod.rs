// tests/core/mod.rs

#[cfg(test)]
mod dispatch;
#[cfg(test)]
mod mono;
