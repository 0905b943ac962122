pub mod accuracy_ops;
pub mod audio_ops;
pub mod lesson_ops;
pub mod progress_ops;
pub mod quiz_ops;
pub mod word_ops;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub(crate) use die;
