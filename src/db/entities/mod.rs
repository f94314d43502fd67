pub mod artist;
pub mod track;
pub mod album;
pub mod store;
pub mod artist_track;
pub mod track_album;
pub mod album_store;

pub use artist::Entity as Artist;
pub use track::Entity as Track;
pub use album::Entity as Album;
pub use store::Entity as Store;
pub use artist_track::Entity as ArtistTrack;
pub use track_album::Entity as TrackAlbum;
pub use album_store::Entity as AlbumStore;
