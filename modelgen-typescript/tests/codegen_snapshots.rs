//! Snapshot tests for prettified whole-program output.

use modelgen_typescript::CodeGen;

fn generate(definition: &str) -> String {
    CodeGen::from_json(definition)
        .expect("Failed to parse definition")
        .generate()
        .output
}

#[test]
fn test_prettified_program() {
    let output = generate(
        r#"{
            "options": { "prettify": true, "indentWidth": 4, "className": "className" },
            "enums": [{
                "name": "Role",
                "names": ["Admin", "User"],
                "values": [1, 2]
            }],
            "interfaces": [{
                "name": "IEntity",
                "import": [{ "name": "Model", "path": "./base" }],
                "properties": [{ "name": "id", "type": "number" }],
                "methods": [{ "name": "save" }]
            }],
            "classes": [{
                "name": "Account",
                "extends": "Model",
                "implements": ["IEntity"],
                "import": [{ "name": "Model", "path": "./base" }],
                "properties": [{
                    "name": "id", "type": "number",
                    "canClone": false, "canExport": false
                }],
                "methods": [{ "name": "save" }]
            }]
        }"#,
    );

    insta::assert_snapshot!(output, @r"
    import { Model } from './base';
    export enum Role {
        Admin = 1,
        User = 2
    }
    export interface IEntity {
        id: number;
        save(): void;
    }
    export class Account extends Model implements IEntity {
        public id: number;
        constructor() {
            super();
            this.className = 'Account';
        }
        public save(): void {
            return;
        }
    }
    ");
}

#[test]
fn test_prettified_base_model() {
    let output = generate(
        r#"{
            "options": { "prettify": true },
            "classes": [{
                "name": "BaseModel",
                "isBaseClass": true,
                "isBaseModel": true,
                "properties": [{ "name": "id", "type": "number", "track": true }]
            }]
        }"#,
    );

    insta::assert_snapshot!(output, @r"
    export class BaseModel {
        private _id: number;
        public get id(): number {
            return this._id;
        }
        public set id(value: number) {
            this._id = value;
     this._isDirty = true;
     this._lastUpdated = (new Date()).getTime();
        }
        protected _clones: string[] = [ 'id' ];
        protected _exports: string[] = [ 'id' ];
        constructor() {
            this._clones = [ ...this._clones, 'id' ];
            this._exports = [ ...this._exports, 'id' ];
        }
        public registerProperty(name: string, canClone: boolean = true, canExport: boolean = true, canUndo: boolean = true): void {
            if (canClone) { this._clones.push(name); } if (canExport) { this._exports.push(name); } if (canUndo) { this.__[name] = this[name]; }
        }
        public registerProperties(properties: any[]): void {
            properties.forEach((p) => { if (!this.isNullOrUndefined(p) && !this.isNullOrEmpty(p.name)) { const n = p.name; const c = this.isNullOrUndefined(p.canClone) ? true : p.canClone; const e = this.isNullOrUndefined(p.canExport) ? true : p.canExport; const u = this.isNullOrUndefined(p.canUndo) ? true : p.canUndo; this.registerProperty(n, c, e, u); } });
        }
    }
    ");
}

#[test]
fn test_indent_width_two() {
    let output = generate(
        r#"{
            "options": { "prettify": true, "indentWidth": 2 },
            "interfaces": [{
                "name": "Point",
                "properties": [
                    { "name": "x", "type": "number" },
                    { "name": "y", "type": "number" }
                ]
            }]
        }"#,
    );

    insta::assert_snapshot!(output, @r"
    export interface Point {
      x: number;
      y: number;
    }
    ");
}
