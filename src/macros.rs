/// Signature of the function handed to [`entrypoint!`].
pub type Entry = fn() -> Result<(), Box<dyn std::error::Error>>;

/// Generates the binary's `main`, which sets up logging and then runs `$path`.
#[macro_export]
macro_rules! entrypoint {
    ($path:path) => {
        const RANDNUM_ENTRY: $crate::macros::Entry = $path;

        fn main() -> ::std::result::Result<(), ::std::boxed::Box<dyn ::std::error::Error>> {
            $crate::logging::init();
            RANDNUM_ENTRY()
        }
    };
}
