mod albums;
mod artists;
mod stores;
mod tracks;

pub use albums::{AlbumChanges, AlbumRepository, AlbumWithRelations, NewAlbum};
pub use artists::{ArtistChanges, ArtistRepository, NewArtist};
pub use stores::StoreRepository;
pub use tracks::{NewTrack, TrackChanges, TrackRepository, TrackWithArtists};
