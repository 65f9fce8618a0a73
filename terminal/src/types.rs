//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

/// How keystrokes reach the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// Canonical mode: the terminal echoes and edits locally and the client
    /// sends whole lines.
    Line,
    /// Raw mode: no echo, no line editing, every byte (control characters
    /// included) is sent as soon as it is typed.
    #[default]
    Character,
}

impl InputMode {
    /// Whether this mode needs the terminal switched to raw.
    pub fn is_raw(self) -> bool {
        matches!(self, InputMode::Character)
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            InputMode::Line => "line",
            InputMode::Character => "character",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::InputMode;

    #[test]
    fn only_character_mode_is_raw() {
        assert!(InputMode::Character.is_raw());
        assert!(!InputMode::Line.is_raw());
        assert_eq!(InputMode::default(), InputMode::Character);
    }
}
