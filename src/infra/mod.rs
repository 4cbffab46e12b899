// ============================================================
// Layer 6: Infrastructure Layer
// ============================================================
// Everything that turns in-memory arrays into files:
//
//   array_format.rs : Bracketed text rendering of the feature
//                     matrix and label vector, in the same
//                     layout numpy prints arrays in:
//                       [[5.1,3.5,1.4,0.2],
//                        [4.9,3. ,1.4,0.2]]
//
//   array_writer.rs : Writes one rendered array plus a newline
//                     to a file, truncating by default or
//                     appending when asked to.
//
//   info_store.rs   : Saves the dataset summary (sizes and the
//                     id-ordered class names) as JSON.

/// Array → text rendering
pub mod array_format;

/// Text dump file writer
pub mod array_writer;

/// Dataset summary JSON persistence
pub mod info_store;
