pub mod recursive;

pub use recursive::RecursiveResolver;
