mod merge_ancestor_and_self;
mod merge_criss_cross;
mod merge_fast_forward;
mod merge_simple_divergence;
