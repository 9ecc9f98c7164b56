mod gallery;

pub use gallery::{
    Effect as GalleryEffect, Event as GalleryEvent, Gallery, Props as GalleryProps,
};
