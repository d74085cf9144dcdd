use std::error::Error;
use std::fmt;

/// Errores al cargar la plantilla de equipos embebida
#[derive(Debug)]
pub enum DataError {
    Parse(serde_yaml::Error),
    UnknownHiddenMember { team: String, name: String },
    DuplicateTeam(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataError::Parse(e) => write!(f, "No se pudo parsear la lista de equipos YAML: {e}"),
            DataError::UnknownHiddenMember { team, name } => {
                write!(f, "El miembro oculto '{name}' no pertenece al equipo '{team}'")
            }
            DataError::DuplicateTeam(team) => write!(f, "Equipo duplicado: '{team}'"),
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DataError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for DataError {
    fn from(e: serde_yaml::Error) -> Self {
        DataError::Parse(e)
    }
}
