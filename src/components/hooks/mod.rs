mod use_copy_echo;

pub(crate) use use_copy_echo::*;
