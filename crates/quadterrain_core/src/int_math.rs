/// Returns `true` iff `x` is a positive power of 2.
#[inline]
pub fn is_power_of_2(x: i32) -> bool {
    x > 0 && (x as u32).is_power_of_two()
}

/// Panics unless `x` is a positive power of 2. Sizes are never rounded to fit.
#[inline]
pub fn check_power_of_2(x: i32) -> i32 {
    assert!(is_power_of_2(x), "size ({}) is not a power of two", x);

    x
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
