//! ユーザー向けメッセージ（ポルトガル語UI）

pub const NO_FILE_SELECTED: &str = "Por favor, selecione um arquivo PDF";
pub const NOTHING_TO_SAVE: &str = "Nenhum dado para salvar";

pub const EXTRACT_SUCCESS: &str = "Dados extraídos com sucesso!";
pub const SAVE_SUCCESS: &str = "Dados salvos no banco de dados com sucesso!";
pub const COPY_SUCCESS: &str = "JSON copiado para a área de transferência!";

pub const EXTRACT_FAILED_PREFIX: &str = "Erro ao extrair dados: ";
pub const SAVE_FAILED_PREFIX: &str = "Erro ao salvar dados: ";
pub const COPY_FAILED_PREFIX: &str = "Erro ao copiar JSON: ";
