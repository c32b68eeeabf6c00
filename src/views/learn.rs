use maud::{html, Markup};

use crate::{names, store::WordEntry};

pub struct WordListData {
    pub dict_id: String,
    pub dict_name: String,
    pub words: Vec<WordEntry>,
    pub page: usize,
    pub size: usize,
    pub total_pages: usize,
}

pub fn word_list(data: WordListData) -> Markup {
    html! {
        h1 { (data.dict_name) }
        p."secondary" { "Page " (data.page) " of " (data.total_pages) }

        table.word-table {
            thead {
                tr {
                    th { "Word" }
                    th { "Part of speech" }
                    th { "Meaning" }
                }
            }
            tbody {
                @for entry in &data.words {
                    tr {
                        td { strong { (entry.word) } }
                        td { em { (entry.pos) } }
                        td { (entry.meaning) }
                    }
                }
            }
        }

        nav.pager {
            ul {
                @if data.page > 1 {
                    li {
                        a role="button" class="outline"
                          href=(names::learn_url(&data.dict_id, data.page - 1, data.size)) {
                            "Previous"
                        }
                    }
                }
                @if data.page < data.total_pages {
                    li {
                        a role="button"
                          href=(names::learn_url(&data.dict_id, data.page + 1, data.size)) {
                            "Next"
                        }
                    }
                }
            }
            ul {
                li."secondary" { "Words per page:" }
                @for size in names::PAGE_SIZES {
                    li {
                        @if *size == data.size {
                            strong { (size) }
                        } @else {
                            a href=(names::learn_url(&data.dict_id, 1, *size)) { (size) }
                        }
                    }
                }
            }
        }
    }
}
