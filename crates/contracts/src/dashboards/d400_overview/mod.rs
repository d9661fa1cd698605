use serde::{Deserialize, Serialize};

/// Плитка сводной панели: какую коллекцию считать и как подписать
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountTile {
    Boards,
    Programs,
    Subjects,
    Chapters,
    Topics,
    Questions,
    Users,
}

impl CountTile {
    pub const ALL: [CountTile; 7] = [
        CountTile::Boards,
        CountTile::Programs,
        CountTile::Subjects,
        CountTile::Chapters,
        CountTile::Topics,
        CountTile::Questions,
        CountTile::Users,
    ];

    /// Путь коллекции в API
    pub fn endpoint(&self) -> &'static str {
        match self {
            CountTile::Boards => "/boards",
            CountTile::Programs => "/programs",
            CountTile::Subjects => "/subjects",
            CountTile::Chapters => "/chapters",
            CountTile::Topics => "/topics",
            CountTile::Questions => "/questions",
            CountTile::Users => "/users",
        }
    }

    /// Ключ списка в конверте ответа
    pub fn plural_key(&self) -> &'static str {
        match self {
            CountTile::Boards => "boards",
            CountTile::Programs => "programs",
            CountTile::Subjects => "subjects",
            CountTile::Chapters => "chapters",
            CountTile::Topics => "topics",
            CountTile::Questions => "questions",
            CountTile::Users => "users",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CountTile::Boards => "Boards",
            CountTile::Programs => "Programs",
            CountTile::Subjects => "Subjects",
            CountTile::Chapters => "Chapters",
            CountTile::Topics => "Topics",
            CountTile::Questions => "Questions",
            CountTile::Users => "Users",
        }
    }

    /// Имя иконки для `icon()`
    pub fn icon_name(&self) -> &'static str {
        match self {
            CountTile::Boards => "board",
            CountTile::Programs => "program",
            CountTile::Subjects => "subject",
            CountTile::Chapters => "chapter",
            CountTile::Topics => "topic",
            CountTile::Questions => "question",
            CountTile::Users => "users",
        }
    }
}

/// Итоги по всем плиткам; `None` означает, что запрос не удался
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardCounts {
    pub entries: Vec<(CountTile, Option<usize>)>,
}

impl DashboardCounts {
    pub fn get(&self, tile: CountTile) -> Option<usize> {
        self.entries
            .iter()
            .find(|(t, _)| *t == tile)
            .and_then(|(_, count)| *count)
    }

    /// Количество плиток, для которых данные не загрузились
    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|(_, c)| c.is_none()).count()
    }
}
