mod assemblyai_engine;
mod mock_transcription_engine;

pub use assemblyai_engine::AssemblyAiEngine;
pub use mock_transcription_engine::MockTranscriptionEngine;
