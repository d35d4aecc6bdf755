//! Built-in explanation content for the implemented labs.

use std::collections::HashMap;

use crate::explanation::{CodeExample, Explanation, KeyPoint};

fn key_point(title: &str, description: &str) -> KeyPoint {
    KeyPoint {
        title: title.into(),
        description: description.into(),
    }
}

fn code_example(label: &str, source: &str) -> CodeExample {
    CodeExample {
        label: label.into(),
        source: source.into(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).into()).collect()
}

pub(crate) fn builtin_explanations() -> HashMap<String, Explanation> {
    let mut explanations = HashMap::new();
    explanations.insert("context".into(), context());
    explanations.insert("redux".into(), redux());
    explanations.insert("zustand".into(), zustand());
    explanations.insert("async-storage".into(), async_storage());
    explanations.insert("secure-store".into(), secure_store());
    explanations
}

fn context() -> Explanation {
    Explanation {
        title: "Context API".into(),
        subtitle: "React's built-in state sharing".into(),
        overview: "The Context API shares state down a component tree without passing \
                   props through every level. A provider holds the value; any \
                   descendant reads it through a hook."
            .into(),
        key_points: vec![
            key_point("Built-in", "No extra dependency; ships with React"),
            key_point("Provider/Consumer", "A provider scopes the value to a subtree"),
            key_point(
                "Re-renders",
                "Every consumer re-renders when the context value changes",
            ),
        ],
        code_examples: vec![code_example(
            "basic",
            r#"const ThemeContext = createContext('light');

function App() {
  return (
    <ThemeContext.Provider value="dark">
      <Toolbar />
    </ThemeContext.Provider>
  );
}

function Toolbar() {
  const theme = useContext(ThemeContext);
  return <Button theme={theme} />;
}"#,
        )],
        pros: strings(&[
            "No dependency to install",
            "Simple mental model",
            "Good for low-frequency updates like theme or locale",
        ]),
        cons: strings(&[
            "Not optimized for frequent updates",
            "Provider nesting gets noisy",
            "No devtools or middleware",
        ]),
        use_cases: strings(&["Theming", "Locale", "Current user", "Feature flags"]),
    }
}

fn redux() -> Explanation {
    Explanation {
        title: "Redux Toolkit".into(),
        subtitle: "The official, opinionated toolset for Redux".into(),
        overview: "Redux Toolkit is the official recommended approach for writing Redux \
                   logic. It provides utilities to simplify common Redux use cases, \
                   including store setup, creating reducers and actions, and handling \
                   immutable updates."
            .into(),
        key_points: vec![
            key_point(
                "createSlice",
                "Combines reducers, actions, and selectors in one place",
            ),
            key_point(
                "Immer Integration",
                "Write 'mutating' code that becomes immutable updates",
            ),
            key_point(
                "DevTools",
                "Built-in support for Redux DevTools time-travel debugging",
            ),
        ],
        code_examples: vec![
            code_example(
                "slice",
                r#"const counterSlice = createSlice({
  name: 'counter',
  initialState: { value: 0 },
  reducers: {
    increment: (state) => {
      state.value += 1;  // Immer makes this safe!
    },
    incrementByAmount: (state, action: PayloadAction<number>) => {
      state.value += action.payload;
    },
  },
});"#,
            ),
            code_example(
                "store",
                r#"export const store = configureStore({
  reducer: {
    counter: counterReducer,
  },
});"#,
            ),
        ],
        pros: strings(&[
            "Industry standard for large React apps",
            "Excellent DevTools with time-travel debugging",
            "Predictable state container",
            "Massive ecosystem and middleware support",
        ]),
        cons: strings(&[
            "More boilerplate than simpler solutions",
            "Steeper learning curve for beginners",
            "Can be overkill for small apps",
        ]),
        use_cases: strings(&[
            "Large applications with complex state",
            "Teams that need standardized patterns",
            "Apps with complex async workflows",
        ]),
    }
}

fn zustand() -> Explanation {
    Explanation {
        title: "Zustand".into(),
        subtitle: "Lightweight state management with hooks".into(),
        overview: "Zustand is a small, fast state container. A store is a hook; \
                   components subscribe to exactly the slice they select, so updates \
                   stay cheap without providers or reducers."
            .into(),
        key_points: vec![
            key_point("Tiny", "A fraction of the size of Redux"),
            key_point("No Provider", "Stores work without wrapping the component tree"),
            key_point("Selectors", "Components re-render only for the state they select"),
        ],
        code_examples: vec![code_example(
            "store",
            r#"const useCounter = create((set) => ({
  count: 0,
  increment: () => set((state) => ({ count: state.count + 1 })),
}));

function Counter() {
  const count = useCounter((state) => state.count);
  const increment = useCounter((state) => state.increment);
  return <Button onPress={increment} title={count.toString()} />;
}"#,
        )],
        pros: strings(&[
            "Minimal boilerplate",
            "No provider wrapper",
            "Fast, selector-based subscriptions",
        ]),
        cons: strings(&[
            "Smaller ecosystem than Redux",
            "Less opinionated, so conventions vary by team",
        ]),
        use_cases: strings(&[
            "Small to medium apps",
            "Rapid prototyping",
            "Replacing prop drilling without ceremony",
        ]),
    }
}

fn async_storage() -> Explanation {
    Explanation {
        title: "AsyncStorage".into(),
        subtitle: "Persistent key-value storage".into(),
        overview: "AsyncStorage is an unencrypted, asynchronous, persistent, key-value \
                   storage system for React Native. It's simple to use for storing \
                   small amounts of data like user preferences."
            .into(),
        key_points: vec![
            key_point("Persistent", "Data survives app restarts and updates"),
            key_point("Key-Value", "Simple string-based storage system"),
            key_point("Async", "All operations are asynchronous (use await)"),
            key_point("JSON", "Store objects by stringifying them"),
        ],
        code_examples: vec![
            code_example(
                "basic",
                r#"// Store data
await AsyncStorage.setItem('@key', 'value');

// Retrieve data
const value = await AsyncStorage.getItem('@key');

// Remove data
await AsyncStorage.removeItem('@key');"#,
            ),
            code_example(
                "objects",
                r#"const user = { name: 'John', theme: 'dark' };

// Store as JSON string
await AsyncStorage.setItem('@user', JSON.stringify(user));

// Retrieve and parse
const json = await AsyncStorage.getItem('@user');
const parsed = json ? JSON.parse(json) : null;"#,
            ),
        ],
        pros: strings(&[
            "Dead simple API",
            "Works on every platform",
            "Good enough for preferences and small caches",
        ]),
        cons: strings(&[
            "Not encrypted",
            "String values only (need JSON for objects)",
            "Not suitable for large data",
            "No query capabilities",
        ]),
        use_cases: strings(&[
            "User preferences",
            "App settings",
            "Cached data",
            "Onboarding state",
        ]),
    }
}

fn secure_store() -> Explanation {
    Explanation {
        title: "SecureStore".into(),
        subtitle: "Encrypted storage for sensitive data".into(),
        overview: "SecureStore provides a way to encrypt and securely store key-value \
                   pairs locally on the device. On iOS, it uses Keychain Services, and \
                   on Android, it uses the Android Keystore."
            .into(),
        key_points: vec![
            key_point("Encrypted", "Data is encrypted using device-level security"),
            key_point("Keychain/Keystore", "Uses native secure storage APIs"),
            key_point("Platform Support", "iOS and Android only (not web)"),
        ],
        code_examples: vec![code_example(
            "basic",
            r#"// Store encrypted value
await SecureStore.setItemAsync('token', 'secret_value');

// Retrieve decrypted value
const token = await SecureStore.getItemAsync('token');

// Delete value
await SecureStore.deleteItemAsync('token');"#,
        )],
        pros: strings(&[
            "Device-level encryption without extra code",
            "Same key-value shape as plain storage",
        ]),
        cons: strings(&[
            "Unavailable on the web",
            "Small values only",
            "Slower than unencrypted storage",
        ]),
        use_cases: strings(&[
            "Authentication tokens",
            "API keys and secrets",
            "User credentials",
            "Encryption keys",
        ]),
    }
}
