pub mod segmenter;

// Re-export main types for convenient access
pub use segmenter::{SegmentationRules, SentenceSegmenter, SplitFlags};

// Re-export the quote normalization step for callers that pre-clean text
// before doing their own processing
pub use segmenter::normalization::clean_unicode;
