//! Mansion builders: JSON layout files and the built-in preset mansions.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::level::Level;
use crate::room::{GraphError, Room, RoomGraph, Side};

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("failed to read layout file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid layout JSON")]
    Parse(#[from] serde_json::Error),
    #[error("invalid mansion")]
    Graph(#[from] GraphError),
}

/// One room of a layout file, with its subtrees nested inline.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomSpec {
    pub name: String,
    #[serde(default)]
    pub clue: Option<String>,
    #[serde(default)]
    pub suspect: Option<String>,
    #[serde(default)]
    pub left: Option<Box<RoomSpec>>,
    #[serde(default)]
    pub right: Option<Box<RoomSpec>>,
}

impl RoomSpec {
    pub fn build(&self) -> Result<Room, GraphError> {
        let mut room = Room::new(&self.name, self.clue.as_deref(), self.suspect.as_deref())?;
        for (side, child) in [(Side::Left, &self.left), (Side::Right, &self.right)] {
            if let Some(child) = child {
                room.attach(side, child.build()?)?;
            }
        }
        Ok(room)
    }
}

pub fn parse_layout(json: &str) -> Result<RoomGraph, LayoutError> {
    let spec: RoomSpec = serde_json::from_str(json)?;
    let graph = RoomGraph::new(spec.build()?);
    tracing::debug!(rooms = graph.room_count(), entry = graph.entry().name(), "layout parsed");
    Ok(graph)
}

pub fn load_layout(path: &Path) -> Result<RoomGraph, LayoutError> {
    let json = fs::read_to_string(path).map_err(|source| LayoutError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_layout(&json)
}

pub const MORDOMO: &str = "Mordomo";
pub const COZINHEIRA: &str = "Cozinheira";
pub const JARDINEIRO: &str = "Jardineiro";

/// Room data for one of the seven preset rooms.
type Preset = (&'static str, Option<&'static str>, Option<&'static str>);

const NOVATO_ROOMS: [Preset; 7] = [
    ("Hall de Entrada", None, None),
    ("Sala de Estar", None, None),
    ("Cozinha", None, None),
    ("Biblioteca", None, None),
    ("Sala de Musica", None, None),
    ("Despensa", None, None),
    ("Jardim", None, None),
];

const AVENTUREIRO_ROOMS: [Preset; 7] = [
    ("Hall de Entrada", Some("Carta rasgada perto da porta"), None),
    ("Sala de Estar", Some("Pegadas no tapete"), None),
    ("Cozinha", Some("Faca suja na pia"), None),
    ("Biblioteca", Some("Livro fora do lugar"), None),
    ("Sala de Musica", Some("Partitura com anotacoes estranhas"), None),
    ("Despensa", Some("Prateleira deslocada"), None),
    ("Jardim", Some("Terra remexida perto da fonte"), None),
];

const MESTRE_ROOMS: [Preset; 7] = [
    ("Hall de Entrada", Some("Luvas manchadas deixadas perto do cabideiro"), Some(MORDOMO)),
    ("Sala de Estar", Some("Pegadas de sapato engraxado no tapete caro"), Some(MORDOMO)),
    ("Cozinha", Some("Faca suja escondida atras da pia"), Some(COZINHEIRA)),
    ("Biblioteca", Some("Livro de receitas com paginas rasgadas"), Some(COZINHEIRA)),
    ("Sala de Musica", Some("Partitura com anotacoes sobre o horario do crime"), Some(MORDOMO)),
    ("Despensa", Some("Caixa de ferramentas aberta e poeira remexida"), Some(JARDINEIRO)),
    ("Jardim", Some("Pegadas na terra molhada perto da estufa"), Some(JARDINEIRO)),
];

/// The seven-room mansion for `level`:
///
/// ```text
/// Hall de Entrada
/// ├── e: Sala de Estar
/// │   ├── e: Biblioteca
/// │   └── d: Sala de Musica
/// └── d: Cozinha
///     ├── e: Despensa
///     └── d: Jardim
/// ```
pub fn preset(level: Level) -> Result<RoomGraph, GraphError> {
    let rooms = match level {
        Level::Novato => NOVATO_ROOMS,
        Level::Aventureiro => AVENTUREIRO_ROOMS,
        Level::Mestre => MESTRE_ROOMS,
    };
    let [hall, sala, cozinha, biblioteca, musica, despensa, jardim] =
        rooms.map(|(name, clue, suspect)| Room::new(name, clue, suspect));

    let mut sala = sala?;
    sala.attach_left(biblioteca?)?;
    sala.attach_right(musica?)?;

    let mut cozinha = cozinha?;
    cozinha.attach_left(despensa?)?;
    cozinha.attach_right(jardim?)?;

    let mut hall = hall?;
    hall.attach_left(sala)?;
    hall.attach_right(cozinha)?;

    Ok(RoomGraph::new(hall))
}
