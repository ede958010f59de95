use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::archive_page::ArchivePage;
use crate::pages::collection_view_page::CollectionViewPage;
use crate::pages::collections_page::CollectionsPage;
use crate::pages::home_page::HomePage;
use crate::pages::login_page::LoginPage;
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::user_management_page::UserManagementPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    // `lang` is a plain `en`/`ar` tag; an empty value means the parameter
    // was absent and gets normalized by the page
    #[route("/archive?:lang")]
    ArchivePage { lang: String },


    #[route("/collections?:lang&:isPrivate")]
    CollectionsPage { lang: String, isPrivate: bool },


    #[route("/collections/:id?:lang&:isPrivate")]
    CollectionViewPage { id: u64, lang: String, isPrivate: bool },


    #[route("/user-management")]
    UserManagementPage {},

    #[route("/login")]
    LoginPage {},

    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },
}
